//! Topic reads.

use crate::error::ApiError;
use crate::models::Topic;
use sqlx::PgPool;

pub struct TopicService;

impl TopicService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, ApiError> {
        let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
            .fetch_all(pool)
            .await?;
        Ok(topics)
    }
}
