use async_trait::async_trait;

use super::entities::user;
use crate::shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Ok(None)` when no user has that username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<user::Model>>;
}
