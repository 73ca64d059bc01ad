mod habit_dto;
mod journal_dto;
mod progress_dto;
mod user_dto;

pub use habit_dto::*;
pub use journal_dto::*;
pub use progress_dto::*;
pub use user_dto::*;
