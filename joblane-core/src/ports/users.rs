use async_trait::async_trait;
use joblane_model::{User, UserId};

use crate::error::Result;

#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Persist a new user together with their password hash. Fails with
    /// `CoreError::Conflict` when the email is already taken.
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()>;

    /// Case-insensitive email lookup.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>>;

    async fn get_password_hash(&self, id: UserId) -> Result<Option<String>>;
}
