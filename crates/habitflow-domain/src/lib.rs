// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod habit;
pub mod journal;
pub mod shared;
pub mod user;

// Re-exports for convenience
pub use calendar::{Clock, DateInput, DateKey};
pub use shared::{DomainError, HabitId, JournalEntryId, UserId};
