use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::friend_commands::*;
use crate::application::dtos::FriendDto;
use habitflow_domain::shared::{DomainError, UserId};
use habitflow_domain::user::{ShareCode, UserRepository};

/// Add a friend by share code. The friendship is one-directional.
pub struct AddFriendCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl AddFriendCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<AddFriendCommand> for AddFriendCommandHandler {
    type Result = FriendDto;

    async fn handle(&self, cmd: AddFriendCommand) -> Result<Self::Result, DomainError> {
        info!("Handling AddFriendCommand for user: {}", cmd.user_id);

        let user_id = UserId::parse(&cmd.user_id)?;

        let mut user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        // A malformed code cannot belong to anyone
        let friend = match ShareCode::parse(&cmd.share_code) {
            Ok(code) => self.user_repo.find_by_share_code(&code).await?,
            Err(_) => None,
        }
        .ok_or_else(|| {
            DomainError::NotFound(format!(
                "No user found with share code {}",
                cmd.share_code.trim()
            ))
        })?;

        user.add_friend(friend.id())?;
        if !self.user_repo.add_friend(&user_id, friend.id()).await? {
            return Err(DomainError::Validation(
                "Already friends with this user".to_string(),
            ));
        }

        info!("{} added friend {}", user.username(), friend.username());

        Ok(FriendDto::from(&friend))
    }
}

pub struct RemoveFriendCommandHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl RemoveFriendCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<RemoveFriendCommand> for RemoveFriendCommandHandler {
    type Result = RemoveFriendResult;

    async fn handle(&self, cmd: RemoveFriendCommand) -> Result<Self::Result, DomainError> {
        let user_id = UserId::parse(&cmd.user_id)?;
        let friend_id = UserId::parse(&cmd.friend_id)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        let removed = self.user_repo.remove_friend(&user_id, &friend_id).await?;
        if removed {
            info!("{} removed friend {}", user.username(), friend_id);
        }

        Ok(RemoveFriendResult { removed })
    }
}
