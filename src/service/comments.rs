//! Comment insert and delete.

use crate::error::ApiError;
use crate::models::Comment;
use sqlx::PgPool;

/// PostgreSQL foreign key violation.
const FK_VIOLATION: &str = "23503";

pub struct CommentService;

impl CommentService {
    /// Insert a comment under an article. An unknown username surfaces as a
    /// foreign key violation and maps to the invalid-username failure; other
    /// store errors propagate unchanged.
    pub async fn insert(
        pool: &PgPool,
        article_id: i32,
        username: &str,
        body: &str,
    ) -> Result<Comment, ApiError> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (author, body, article_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(username)
        .bind(body)
        .bind(article_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(FK_VIOLATION) => {
                ApiError::InvalidUsername
            }
            _ => ApiError::Db(e),
        })
    }

    /// Delete a comment by id.
    pub async fn remove(pool: &PgPool, comment_id: i32) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::CommentNotFound);
        }
        Ok(())
    }
}
