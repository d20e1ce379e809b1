//! Topic handlers.

use crate::error::ApiError;
use crate::response::TopicsBody;
use crate::service::TopicService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<TopicsBody>, ApiError> {
    let topics = TopicService::list(&state.pool).await?;
    Ok(Json(TopicsBody { topics }))
}
