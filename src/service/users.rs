//! User reads.

use crate::error::ApiError;
use crate::models::User;
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }
}
