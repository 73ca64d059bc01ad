use async_trait::async_trait;

use super::Habit;
use crate::shared::{DomainError, HabitId, UserId};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert or update the habit's descriptive fields (name, plan, schedule).
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    /// Replace the completion set and cached streak in one step.
    ///
    /// Succeeds only while the stored version still equals `habit.version()`;
    /// otherwise fails with `ConcurrentModification`. Returns the new version.
    async fn save_completions(&self, habit: &Habit) -> Result<i64, DomainError>;

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// All habits of a user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError>;

    /// Returns false when nothing was deleted.
    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError>;
}
