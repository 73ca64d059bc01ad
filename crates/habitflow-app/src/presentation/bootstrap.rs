use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::{FriendQueries, HabitProgressQueries, HabitQueries, JournalQueries};
use crate::presentation::state::{AppState, CommandHandlers, Queries, Repositories, Runtime};
use habitflow_domain::habit::HabitRepository;
use habitflow_domain::journal::JournalRepository;
use habitflow_domain::shared::DomainError;
use habitflow_domain::user::{CredentialHasher, UserRepository};
use habitflow_domain::Clock;
use habitflow_infrastructure::config::AppConfig;
use habitflow_infrastructure::persistence::repositories::{
    SqliteHabitRepository, SqliteJournalRepository, SqliteUserRepository,
};
use habitflow_infrastructure::security::Argon2CredentialHasher;
use habitflow_infrastructure::Database;

/// Open the configured database and bring its schema up to date.
pub async fn open_database(config: &AppConfig) -> Result<Database, DomainError> {
    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::connect(
        &config.database_url,
        config.db_max_connections,
        config.timeouts.db_acquire,
    )
    .await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    Ok(database)
}

/// Wire repositories, queries and handlers around an open database.
pub fn build_app_state(database: Database, clock: Arc<dyn Clock>) -> AppState {
    let started_at = Instant::now();
    let pool = database.pool();

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone())) as Arc<dyn UserRepository>;
    let habit_repo =
        Arc::new(SqliteHabitRepository::new(pool.clone())) as Arc<dyn HabitRepository>;
    let journal_repo =
        Arc::new(SqliteJournalRepository::new(pool.clone())) as Arc<dyn JournalRepository>;
    let hasher = Arc::new(Argon2CredentialHasher::new()) as Arc<dyn CredentialHasher>;
    info!(
        "✓ Repositories initialized ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    let queries = Queries {
        habit: Arc::new(HabitQueries::new(habit_repo.clone())),
        progress: Arc::new(HabitProgressQueries::new(habit_repo.clone(), clock.clone())),
        friend: Arc::new(FriendQueries::new(user_repo.clone(), habit_repo.clone())),
        journal: Arc::new(JournalQueries::new(journal_repo.clone())),
    };

    let command_handlers = CommandHandlers {
        register_user: Arc::new(RegisterUserCommandHandler::new(
            user_repo.clone(),
            hasher.clone(),
        )),
        login: Arc::new(LoginCommandHandler::new(user_repo.clone(), hasher.clone())),
        change_password: Arc::new(ChangePasswordCommandHandler::new(
            user_repo.clone(),
            hasher.clone(),
        )),
        delete_user: Arc::new(DeleteUserCommandHandler::new(
            user_repo.clone(),
            habit_repo.clone(),
            hasher.clone(),
        )),
        create_habit: Arc::new(CreateHabitCommandHandler::new(
            habit_repo.clone(),
            user_repo.clone(),
        )),
        update_habit: Arc::new(UpdateHabitCommandHandler::new(habit_repo.clone())),
        delete_habit: Arc::new(DeleteHabitCommandHandler::new(habit_repo.clone())),
        complete_today: Arc::new(CompleteHabitTodayCommandHandler::new(
            habit_repo.clone(),
            clock.clone(),
        )),
        undo_today: Arc::new(UndoHabitTodayCommandHandler::new(
            habit_repo.clone(),
            clock.clone(),
        )),
        set_completion: Arc::new(SetHabitCompletionCommandHandler::new(
            habit_repo.clone(),
            clock.clone(),
        )),
        add_friend: Arc::new(AddFriendCommandHandler::new(user_repo.clone())),
        remove_friend: Arc::new(RemoveFriendCommandHandler::new(user_repo.clone())),
        upsert_journal: Arc::new(UpsertJournalEntryCommandHandler::new(
            journal_repo.clone(),
            user_repo.clone(),
        )),
        delete_journal: Arc::new(DeleteJournalEntryCommandHandler::new(journal_repo.clone())),
    };
    info!(
        "✓ Command handlers initialized ({}ms)",
        started_at.elapsed().as_millis()
    );

    AppState {
        runtime: Runtime {
            db: database,
            clock,
        },
        repositories: Repositories {
            user: user_repo,
            habit: habit_repo,
            journal: journal_repo,
        },
        queries,
        command_handlers,
    }
}
