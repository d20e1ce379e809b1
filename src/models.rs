//! Typed row projections for the news schema.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Stored article row, as returned by the vote update.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// Article projection carrying the derived comment count. Materialized per
/// read by aggregation over `comments`; never stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArticleRecord {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i32,
}

/// Stored comment row, as returned by the insert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub article_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment as listed under an article; `author` is the commenting user's
/// display name, not the username.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentRecord {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
}
