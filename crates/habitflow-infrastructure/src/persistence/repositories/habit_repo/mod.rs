mod mutations;
mod queries;
mod types;

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use habitflow_domain::habit::{Habit, HabitRepository};
use habitflow_domain::shared::{DomainError, HabitId, UserId};

pub struct SqliteHabitRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteHabitRepository {
    const SELECT_QUERY: &'static str = r#"
            SELECT
                id, user_id, name, description, cue_time, cue_location,
                stack_after, tiny_version, schedule, current_streak, version, created_at
            FROM habits
        "#;

    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        self.save_impl(habit).await
    }

    async fn save_completions(&self, habit: &Habit) -> Result<i64, DomainError> {
        self.save_completions_impl(habit).await
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        self.find_by_id_impl(id).await
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        self.find_by_user_impl(user_id).await
    }

    async fn delete(&self, id: &HabitId) -> Result<bool, DomainError> {
        self.delete_impl(id).await
    }
}
