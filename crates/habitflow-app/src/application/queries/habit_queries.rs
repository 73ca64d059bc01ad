use std::sync::Arc;

use crate::application::dtos::{HabitDto, HabitListDto};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::{DomainError, HabitId, UserId};

pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
}

impl HabitQueries {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }

    /// All habits of a user, newest first
    pub async fn list_for_user(&self, user_id: &str) -> Result<HabitListDto, DomainError> {
        let user_id = UserId::parse(user_id)?;
        let habits = self.habit_repo.find_by_user(&user_id).await?;
        Ok(HabitListDto::from_habits(&habits))
    }

    pub async fn get(&self, habit_id: &str) -> Result<HabitDto, DomainError> {
        let id = HabitId::parse(habit_id)?;
        self.habit_repo
            .find_by_id(&id)
            .await?
            .map(|habit| HabitDto::from(&habit))
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))
    }
}
