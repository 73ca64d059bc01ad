mod database;
mod error_mapper;
pub mod repositories;

pub use database::Database;
pub use error_mapper::RepositoryErrorMapper;
