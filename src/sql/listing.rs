//! Article listing statement: allow-list validation and composition.
//!
//! The listing query string may carry up to three keys (`sort_by`, `order`,
//! `topic`). Sort column and direction end up interpolated into the
//! statement text, so they are restricted to closed enumerations — the store
//! only parameterizes literal values, not identifiers or keywords. The topic
//! filter is caller-controlled text and is always bound, never interpolated.

use crate::error::ApiError;
use std::collections::HashMap;

/// Keys accepted in the listing query string.
const ALLOWED_KEYS: &[&str] = &["sort_by", "order", "topic"];

const MAX_QUERY_KEYS: usize = 3;

/// Columns the listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "article_id" => Self::ArticleId,
            "title" => Self::Title,
            "topic" => Self::Topic,
            "author" => Self::Author,
            "body" => Self::Body,
            "created_at" => Self::CreatedAt,
            "votes" => Self::Votes,
            "comment_count" => Self::CommentCount,
            _ => return None,
        })
    }

    /// ORDER BY expression. Stored columns are table-qualified; the derived
    /// count only exists as an output alias and must be referenced bare.
    fn order_expr(self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::Body => "articles.body",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction. Input matches `asc`/`desc` case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }

    fn sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A statement template plus its bound values, in bind order.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

/// A validated listing request. [`ArticleListing::from_params`] is the only
/// way in, so by the time the composer runs, sort column and direction are
/// known members of their allow-lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListing {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    /// Opaque equality filter; deliberately not checked against the topics
    /// table. An unknown topic simply matches nothing.
    pub topic: Option<String>,
}

impl ArticleListing {
    /// Validate raw query parameters. Checks run in precedence order, first
    /// match wins: key count, key names, sort column, order direction.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        if params.len() > MAX_QUERY_KEYS {
            return Err(ApiError::TooManyQueryKeys);
        }
        if params.keys().any(|k| !ALLOWED_KEYS.contains(&k.as_str())) {
            return Err(ApiError::InvalidQueryKey);
        }
        let sort_by = match params.get("sort_by") {
            Some(raw) => SortColumn::parse(raw).ok_or(ApiError::InvalidSortQuery)?,
            None => SortColumn::CreatedAt,
        };
        let order = match params.get("order") {
            Some(raw) => SortOrder::parse(raw).ok_or(ApiError::InvalidOrderQuery)?,
            None => SortOrder::Descending,
        };
        Ok(Self {
            sort_by,
            order,
            topic: params.get("topic").cloned(),
        })
    }

    /// Compose the aggregate listing statement. Articles with zero comments
    /// survive the left join with a count of 0. The topic filter is the sole
    /// bind parameter and the clause is omitted entirely when absent; sort
    /// column and direction passed validation and are interpolated as
    /// trusted literals.
    pub fn to_query(&self) -> QueryBuf {
        let mut sql = String::from(
            "SELECT articles.*, COUNT(comments.article_id)::INT AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id",
        );
        let mut params = Vec::new();
        if let Some(topic) = &self.topic {
            sql.push_str(" WHERE articles.topic = $1");
            params.push(topic.clone());
        }
        sql.push_str(" GROUP BY articles.article_id ORDER BY ");
        sql.push_str(self.sort_by.order_expr());
        sql.push(' ');
        sql.push_str(self.order.sql());
        QueryBuf { sql, params }
    }
}
