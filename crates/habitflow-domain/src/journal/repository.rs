use async_trait::async_trait;

use super::JournalEntry;
use crate::calendar::DateKey;
use crate::shared::{DomainError, JournalEntryId, UserId};

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Insert or update by id.
    async fn save(&self, entry: &JournalEntry) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &JournalEntryId) -> Result<Option<JournalEntry>, DomainError>;

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: DateKey,
    ) -> Result<Option<JournalEntry>, DomainError>;

    /// Entries of a user, most recent date first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<JournalEntry>, DomainError>;

    async fn delete(&self, id: &JournalEntryId) -> Result<bool, DomainError>;
}
