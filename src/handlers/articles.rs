//! Article handlers: listing, single fetch, vote update, comment listing.

use super::parse_id;
use crate::error::ApiError;
use crate::response::{ArticleBody, ArticlesBody, CommentsBody, UpdatedArticleBody};
use crate::service::ArticleService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ArticlesBody>, ApiError> {
    let articles = ArticleService::list(&state.pool, &params).await?;
    Ok(Json(ArticlesBody { articles }))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleBody>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let article = ArticleService::fetch_by_id(&state.pool, article_id).await?;
    Ok(Json(ArticleBody { article }))
}

pub async fn patch_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<UpdatedArticleBody>, ApiError> {
    let article_id = parse_id(&article_id)?;
    // A missing or non-integer `inc_votes` would previously have surfaced as
    // a store cast error; it is the same caller mistake as a bad id.
    let inc_votes = body
        .get("inc_votes")
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ApiError::InvalidId)?;
    let article = ArticleService::update_votes(&state.pool, article_id, inc_votes).await?;
    Ok(Json(UpdatedArticleBody { article }))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<CommentsBody>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let comments = ArticleService::comments(&state.pool, article_id).await?;
    Ok(Json(CommentsBody { comments }))
}
