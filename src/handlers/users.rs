//! User handlers.

use crate::error::ApiError;
use crate::response::UsersBody;
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<UsersBody>, ApiError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(UsersBody { users }))
}
