//! Statement execution per resource.

mod articles;
mod comments;
mod topics;
mod users;

pub use articles::ArticleService;
pub use comments::CommentService;
pub use topics::TopicService;
pub use users::UserService;
