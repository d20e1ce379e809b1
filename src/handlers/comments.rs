//! Comment handlers: post under an article, delete by id.

use super::parse_id;
use crate::error::ApiError;
use crate::response::NewCommentBody;
use crate::service::{ArticleService, CommentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn post_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<NewCommentBody>), ApiError> {
    let article_id = parse_id(&article_id)?;
    let username = body
        .get("username")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("bad request".into()))?;
    let comment_body = body
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::BadRequest("bad request".into()))?;
    // The article must exist before the insert is attempted: a missing
    // article is an identity failure, not a constraint violation.
    ArticleService::fetch_by_id(&state.pool, article_id).await?;
    let new_comment =
        CommentService::insert(&state.pool, article_id, username, comment_body).await?;
    Ok((StatusCode::CREATED, Json(NewCommentBody { new_comment })))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    CommentService::remove(&state.pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
