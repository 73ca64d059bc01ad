pub mod command_handler;
pub mod friend_commands;
pub mod habit_commands;
pub mod handlers;
pub mod journal_commands;
pub mod user_commands;
