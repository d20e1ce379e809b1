//! Newsroom: news REST API over PostgreSQL.

pub mod error;
pub mod models;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::{api_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
