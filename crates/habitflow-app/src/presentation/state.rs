use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{FriendQueries, HabitProgressQueries, HabitQueries, JournalQueries};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::journal::JournalRepository;
use habitflow_domain::user::UserRepository;
use habitflow_domain::Clock;
use habitflow_infrastructure::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub register_user: Arc<RegisterUserCommandHandler>,
    pub login: Arc<LoginCommandHandler>,
    pub change_password: Arc<ChangePasswordCommandHandler>,
    pub delete_user: Arc<DeleteUserCommandHandler>,
    pub create_habit: Arc<CreateHabitCommandHandler>,
    pub update_habit: Arc<UpdateHabitCommandHandler>,
    pub delete_habit: Arc<DeleteHabitCommandHandler>,
    pub complete_today: Arc<CompleteHabitTodayCommandHandler>,
    pub undo_today: Arc<UndoHabitTodayCommandHandler>,
    pub set_completion: Arc<SetHabitCompletionCommandHandler>,
    pub add_friend: Arc<AddFriendCommandHandler>,
    pub remove_friend: Arc<RemoveFriendCommandHandler>,
    pub upsert_journal: Arc<UpsertJournalEntryCommandHandler>,
    pub delete_journal: Arc<DeleteJournalEntryCommandHandler>,
}

pub struct Runtime {
    pub db: Database,
    pub clock: Arc<dyn Clock>,
}

pub struct Repositories {
    pub user: Arc<dyn UserRepository>,
    pub habit: Arc<dyn HabitRepository>,
    pub journal: Arc<dyn JournalRepository>,
}

pub struct Queries {
    pub habit: Arc<HabitQueries>,
    pub progress: Arc<HabitProgressQueries>,
    pub friend: Arc<FriendQueries>,
    pub journal: Arc<JournalQueries>,
}

/// Shared by every request; held behind an `Arc` in the router.
pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}
