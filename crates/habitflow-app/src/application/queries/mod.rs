pub mod friend_queries;
pub mod habit_progress_queries;
pub mod habit_queries;
pub mod journal_queries;

pub use friend_queries::FriendQueries;
pub use habit_progress_queries::HabitProgressQueries;
pub use habit_queries::HabitQueries;
pub use journal_queries::JournalQueries;
