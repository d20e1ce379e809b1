//! Shared application state for all routes.

use sqlx::PgPool;

/// Store handle injected into routers. Constructed once in the entry point,
/// which owns the pool lifecycle; cloned per router.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
