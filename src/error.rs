//! Typed errors and HTTP mapping.
//!
//! The services and the query builder only ever produce `ApiError` values;
//! the status codes live exclusively in the `IntoResponse` impl, so nothing
//! below the transport layer knows about HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Too many query keys")]
    TooManyQueryKeys,
    #[error("Attempt to query on Invalid key")]
    InvalidQueryKey,
    #[error("Invalid sort query")]
    InvalidSortQuery,
    #[error("Invalid order query")]
    InvalidOrderQuery,
    #[error("No results found for that query")]
    NoResultsForQuery,
    #[error("id not found - does not exist")]
    IdNotFound,
    #[error("comment does not exist")]
    CommentNotFound,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid username")]
    InvalidUsername,
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::TooManyQueryKeys
            | ApiError::InvalidQueryKey
            | ApiError::InvalidSortQuery
            | ApiError::InvalidOrderQuery
            | ApiError::InvalidId
            | ApiError::InvalidUsername
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NoResultsForQuery
            | ApiError::IdNotFound
            | ApiError::CommentNotFound => StatusCode::NOT_FOUND,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = match &self {
            ApiError::Db(e) => {
                tracing::error!(error = %e, "store failure");
                "server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { msg })).into_response()
    }
}
