mod aggregate;
mod repository;

pub use aggregate::JournalEntry;
pub use repository::JournalRepository;
