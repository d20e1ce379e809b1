//! Resource-keyed response envelopes.

use crate::models::{Article, ArticleRecord, Comment, CommentRecord, Topic, User};
use serde::Serialize;

#[derive(Serialize)]
pub struct TopicsBody {
    pub topics: Vec<Topic>,
}

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct ArticlesBody {
    pub articles: Vec<ArticleRecord>,
}

#[derive(Serialize)]
pub struct ArticleBody {
    pub article: ArticleRecord,
}

/// The vote update returns the stored row, without the derived count.
#[derive(Serialize)]
pub struct UpdatedArticleBody {
    pub article: Article,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<CommentRecord>,
}

#[derive(Serialize)]
pub struct NewCommentBody {
    pub new_comment: Comment,
}
