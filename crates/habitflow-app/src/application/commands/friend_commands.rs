use crate::application::commands::command_handler::Command;

#[derive(Debug, Clone)]
pub struct AddFriendCommand {
    pub user_id: String,
    pub share_code: String,
}

impl Command for AddFriendCommand {}

#[derive(Debug, Clone)]
pub struct RemoveFriendCommand {
    pub user_id: String,
    pub friend_id: String,
}

impl Command for RemoveFriendCommand {}

#[derive(Debug, Clone)]
pub struct RemoveFriendResult {
    pub removed: bool,
}
