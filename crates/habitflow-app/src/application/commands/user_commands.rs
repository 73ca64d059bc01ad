use crate::application::commands::command_handler::Command;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl Command for RegisterUserCommand {}

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl Command for LoginCommand {}

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    pub user_id: String,
    pub current_password: String,
    pub new_password: String,
}

impl Command for ChangePasswordCommand {}

/// Delete a user and everything they own; requires their password
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: String,
    pub password: String,
}

impl Command for DeleteUserCommand {}

#[derive(Debug, Clone)]
pub struct ChangePasswordResult {
    pub success: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteUserResult {
    pub success: bool,
    pub habits_removed: usize,
}
