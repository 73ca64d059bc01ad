use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::user_commands::*;
use crate::application::dtos::UserDto;
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::shared::{DomainError, UserId};
use habitflow_domain::user::{
    validate_password, CredentialHasher, ShareCode, User, UserRepository, Username,
};

/// Share codes have 90k possibilities; collisions beyond this are a sign of trouble.
const MAX_SHARE_CODE_ATTEMPTS: usize = 20;

const INVALID_LOGIN: &str = "Invalid username or password";

/// Register user command handler
pub struct RegisterUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl RegisterUserCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { user_repo, hasher }
    }

    async fn unique_share_code(&self) -> Result<ShareCode, DomainError> {
        for _ in 0..MAX_SHARE_CODE_ATTEMPTS {
            let code = ShareCode::generate();
            if !self.user_repo.share_code_exists(&code).await? {
                return Ok(code);
            }
            warn!("Share code collision on {}, regenerating", code);
        }
        Err(DomainError::Conflict(
            "Could not allocate a unique share code".to_string(),
        ))
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserCommandHandler {
    type Result = UserDto;

    async fn handle(&self, cmd: RegisterUserCommand) -> Result<Self::Result, DomainError> {
        let username = Username::parse(&cmd.username)?;
        validate_password(&cmd.password)?;

        info!("Handling RegisterUserCommand for username: {}", username);

        if self
            .user_repo
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Username already taken".to_string()));
        }

        let share_code = self.unique_share_code().await?;
        let password_hash = self.hasher.hash(&cmd.password)?;
        let user = User::new(username, password_hash, share_code);

        self.user_repo.create(&user).await?;

        info!("User registered: {} ({})", user.username(), user.id());

        Ok(UserDto::from(&user))
    }
}

/// Login command handler
pub struct LoginCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl LoginCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { user_repo, hasher }
    }
}

#[async_trait]
impl CommandHandler<LoginCommand> for LoginCommandHandler {
    type Result = UserDto;

    async fn handle(&self, cmd: LoginCommand) -> Result<Self::Result, DomainError> {
        if cmd.username.trim().is_empty() || cmd.password.is_empty() {
            return Err(DomainError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        // Unknown user and wrong password are indistinguishable to the caller
        let user = self
            .user_repo
            .find_by_username(cmd.username.trim())
            .await?
            .ok_or_else(|| DomainError::InvalidCredentials(INVALID_LOGIN.to_string()))?;

        if !self.hasher.verify(&cmd.password, user.password_hash())? {
            warn!("Failed login attempt for user: {}", user.username());
            return Err(DomainError::InvalidCredentials(INVALID_LOGIN.to_string()));
        }

        info!("User logged in: {}", user.username());

        Ok(UserDto::from(&user))
    }
}

/// Change password command handler
pub struct ChangePasswordCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl ChangePasswordCommandHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { user_repo, hasher }
    }
}

#[async_trait]
impl CommandHandler<ChangePasswordCommand> for ChangePasswordCommandHandler {
    type Result = ChangePasswordResult;

    async fn handle(&self, cmd: ChangePasswordCommand) -> Result<Self::Result, DomainError> {
        info!("Handling ChangePasswordCommand for user: {}", cmd.user_id);

        let user_id = UserId::parse(&cmd.user_id)?;
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        if !self.hasher.verify(&cmd.current_password, user.password_hash())? {
            return Err(DomainError::InvalidCredentials(
                "Current password is incorrect".to_string(),
            ));
        }
        validate_password(&cmd.new_password)?;

        // A concurrent change since the load invalidates the verified password
        let new_hash = self.hasher.hash(&cmd.new_password)?;
        if !self
            .user_repo
            .replace_password_hash(&user_id, user.password_hash(), &new_hash)
            .await?
        {
            return Err(DomainError::InvalidCredentials(
                "Current password is incorrect".to_string(),
            ));
        }

        info!("Password changed for user: {}", user.username());

        Ok(ChangePasswordResult { success: true })
    }
}

/// Delete user command handler
///
/// The repository removes the user's habits, journal and friendships with them.
pub struct DeleteUserCommandHandler {
    user_repo: Arc<dyn UserRepository>,
    habit_repo: Arc<dyn HabitRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl DeleteUserCommandHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        habit_repo: Arc<dyn HabitRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            user_repo,
            habit_repo,
            hasher,
        }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserCommand> for DeleteUserCommandHandler {
    type Result = DeleteUserResult;

    async fn handle(&self, cmd: DeleteUserCommand) -> Result<Self::Result, DomainError> {
        info!("Handling DeleteUserCommand for user: {}", cmd.user_id);

        let user_id = UserId::parse(&cmd.user_id)?;
        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(cmd.user_id.clone()))?;

        if !self.hasher.verify(&cmd.password, user.password_hash())? {
            return Err(DomainError::InvalidCredentials(
                "Password is incorrect".to_string(),
            ));
        }

        let habits_removed = self.habit_repo.find_by_user(&user_id).await?.len();
        self.user_repo.delete(&user_id).await?;

        info!(
            "User deleted: {} (habits removed: {})",
            user.username(),
            habits_removed
        );

        Ok(DeleteUserResult {
            success: true,
            habits_removed,
        })
    }
}
