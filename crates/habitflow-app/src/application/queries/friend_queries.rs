use std::sync::Arc;

use crate::application::dtos::{FriendDto, FriendListDto, HabitListDto};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::{DomainError, UserId};
use habitflow_domain::user::UserRepository;

pub struct FriendQueries {
    user_repo: Arc<dyn UserRepository>,
    habit_repo: Arc<dyn HabitRepository>,
}

impl FriendQueries {
    pub fn new(user_repo: Arc<dyn UserRepository>, habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self {
            user_repo,
            habit_repo,
        }
    }

    /// Friends in the order they were added
    pub async fn list_friends(&self, user_id: &str) -> Result<FriendListDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        let friends: Vec<FriendDto> = self
            .user_repo
            .find_by_ids(user.friends())
            .await?
            .iter()
            .map(FriendDto::from)
            .collect();

        Ok(FriendListDto {
            count: friends.len(),
            friends,
        })
    }

    /// Habits of `friend_id`, visible only if `user_id` has added them
    pub async fn friend_habits(
        &self,
        user_id: &str,
        friend_id: &str,
    ) -> Result<HabitListDto, DomainError> {
        let id = UserId::parse(user_id)?;
        let friend = UserId::parse(friend_id)?;

        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        if !user.is_friend_with(&friend) {
            return Err(DomainError::Forbidden(
                "You can only view habits of your friends".to_string(),
            ));
        }

        let habits = self.habit_repo.find_by_user(&friend).await?;
        Ok(HabitListDto::from_habits(&habits))
    }
}
