use habitflow_domain::shared::DomainError;

/// Translates storage errors into domain errors, tagging them with the
/// operation that failed.
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict(format!("{}: record already exists", context))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::NotFound(format!("{}: referenced record does not exist", context))
            }
            sqlx::Error::RowNotFound => DomainError::NotFound(context.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DomainError::Infrastructure(format!("{}: {}", context, err))
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DomainError::DataIntegrity(format!("{}: {}", context, err))
            }
            _ => DomainError::Repository(format!("{}: {}", context, err)),
        }
    }

    pub fn map_json_error(err: serde_json::Error, context: &str) -> DomainError {
        DomainError::Serialization(format!("{}: {}", context, err))
    }
}
