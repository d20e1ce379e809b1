//! Article reads and the listing pipeline: validate, compose, execute,
//! classify.

use crate::error::ApiError;
use crate::models::{Article, ArticleRecord, CommentRecord};
use crate::sql::ArticleListing;
use sqlx::PgPool;
use std::collections::HashMap;

const SELECT_ARTICLE_WITH_COUNT: &str =
    "SELECT articles.*, COUNT(comments.article_id)::INT AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id \
     WHERE articles.article_id = $1 \
     GROUP BY articles.article_id";

pub struct ArticleService;

impl ArticleService {
    /// List articles per the caller's query parameters. Validation failures
    /// short-circuit before the store is touched; otherwise exactly one
    /// round-trip happens, with no retries.
    pub async fn list(
        pool: &PgPool,
        params: &HashMap<String, String>,
    ) -> Result<Vec<ArticleRecord>, ApiError> {
        let listing = ArticleListing::from_params(params)?;
        let q = listing.to_query();
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, ArticleRecord>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        let rows = query.fetch_all(pool).await?;
        classify_listing(rows)
    }

    /// Fetch one article with its derived comment count.
    pub async fn fetch_by_id(pool: &PgPool, article_id: i32) -> Result<ArticleRecord, ApiError> {
        sqlx::query_as::<_, ArticleRecord>(SELECT_ARTICLE_WITH_COUNT)
            .bind(article_id)
            .fetch_optional(pool)
            .await?
            .ok_or(ApiError::IdNotFound)
    }

    /// Adjust an article's vote count, returning the updated row.
    pub async fn update_votes(
        pool: &PgPool,
        article_id: i32,
        inc_votes: i32,
    ) -> Result<Article, ApiError> {
        sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING *",
        )
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::IdNotFound)
    }

    /// Comments under an article, each carrying its author's display name.
    pub async fn comments(pool: &PgPool, article_id: i32) -> Result<Vec<CommentRecord>, ApiError> {
        let rows = sqlx::query_as::<_, CommentRecord>(
            "SELECT comments.comment_id, comments.votes, comments.created_at, \
                    users.name AS author, comments.body \
             FROM comments \
             LEFT JOIN users ON users.username = comments.author \
             WHERE comments.article_id = $1",
        )
        .bind(article_id)
        .fetch_all(pool)
        .await?;
        if rows.is_empty() {
            return Err(ApiError::IdNotFound);
        }
        Ok(rows)
    }
}

/// Listing outcome classification. An empty result set is a query outcome
/// ("the filter matched nothing"), never an identity failure; the listing
/// path has no notion of "id not found". Non-empty results pass through in
/// store order, which already reflects the requested ordering.
fn classify_listing(rows: Vec<ArticleRecord>) -> Result<Vec<ArticleRecord>, ApiError> {
    if rows.is_empty() {
        return Err(ApiError::NoResultsForQuery);
    }
    Ok(rows)
}
