pub mod habit_repo;
pub mod journal_repo;
pub mod user_repo;

pub use habit_repo::SqliteHabitRepository;
pub use journal_repo::SqliteJournalRepository;
pub use user_repo::SqliteUserRepository;
