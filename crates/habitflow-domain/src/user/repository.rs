use async_trait::async_trait;

use super::{ShareCode, User};
use crate::shared::{DomainError, UserId};

/// Users are inserted once; later edits are row-level writes.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, including any friends already on the aggregate.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_share_code(&self, code: &ShareCode) -> Result<Option<User>, DomainError>;

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError>;

    async fn share_code_exists(&self, code: &ShareCode) -> Result<bool, DomainError>;

    /// Append `friend_id` to the end of the friend list. Returns `false` when
    /// it was already there.
    async fn add_friend(&self, user_id: &UserId, friend_id: &UserId) -> Result<bool, DomainError>;

    /// Returns whether the friend was present.
    async fn remove_friend(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<bool, DomainError>;

    /// Swap the password hash only if it still equals `expected`.
    async fn replace_password_hash(
        &self,
        user_id: &UserId,
        expected: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError>;

    /// Delete a user together with their habits, journal and friendships.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;
}
