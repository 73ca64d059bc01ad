mod completion_handlers;
mod friend_handlers;
mod habit_handlers;
mod journal_handlers;
mod user_handlers;

#[cfg(test)]
mod tests;

pub use completion_handlers::{
    CompleteHabitTodayCommandHandler, SetHabitCompletionCommandHandler,
    UndoHabitTodayCommandHandler, MAX_COMPLETION_ATTEMPTS,
};
pub use friend_handlers::{AddFriendCommandHandler, RemoveFriendCommandHandler};
pub use habit_handlers::{
    CreateHabitCommandHandler, DeleteHabitCommandHandler, UpdateHabitCommandHandler,
};
pub use journal_handlers::{DeleteJournalEntryCommandHandler, UpsertJournalEntryCommandHandler};
pub use user_handlers::{
    ChangePasswordCommandHandler, DeleteUserCommandHandler, LoginCommandHandler,
    RegisterUserCommandHandler,
};
