//! API routes. Nested under /api by the entry point; unmatched paths inside
//! the nest get the API's own catch-all instead of a bare 404.

use crate::error::ErrorBody;
use crate::handlers::{articles, comments, topics, users};
use crate::state::AppState;
use axum::{
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/topics", get(topics::list))
        .route("/articles", get(articles::list))
        .route(
            "/articles/:article_id",
            get(articles::get_by_id).patch(articles::patch_votes),
        )
        .route(
            "/articles/:article_id/comments",
            get(articles::get_comments).post(comments::post_comment),
        )
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route("/users", get(users::list))
        .fallback(unmatched)
        .with_state(state)
}

async fn unmatched() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            msg: "cannot find id - bad request".into(),
        }),
    )
}
