use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            /// Parse an identifier received from a caller, rejecting anything
            /// that is not a UUID.
            pub fn parse(s: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(s.trim())
                    .map(|id| Self(id.to_string()))
                    .map_err(|_| DomainError::InvalidInput(format!("Invalid {}", $label)))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId, "userId");
define_id!(HabitId, "habitId");
define_id!(JournalEntryId, "entryId");

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    InvalidCredentials = 1001,
    Forbidden = 1002,

    // Resource Not Found (2xxx)
    UserNotFound = 2001,
    HabitNotFound = 2002,
    JournalEntryNotFound = 2003,
    ResourceNotFound = 2004,

    // Business Logic (3xxx)
    AlreadyCompleted = 3001,
    NotCompleted = 3002,
    FutureDateRejected = 3003,
    DuplicateResource = 3004,
    ConcurrentModification = 3005,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4002,
    SerializationError = 4003,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
    InvalidDate = 6003,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::Forbidden
            | ErrorCode::ConcurrentModification => ErrorSeverity::Warning,

            ErrorCode::UserNotFound
            | ErrorCode::HabitNotFound
            | ErrorCode::JournalEntryNotFound
            | ErrorCode::ResourceNotFound
            | ErrorCode::AlreadyCompleted
            | ErrorCode::NotCompleted
            | ErrorCode::FutureDateRejected
            | ErrorCode::DuplicateResource
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput
            | ErrorCode::InvalidDate => ErrorSeverity::Info,

            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if the failed operation can simply be retried
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::ConcurrentModification | ErrorCode::InfrastructureError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Journal entry not found: {0}")]
    JournalEntryNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Not completed: {0}")]
    NotCompleted(String),

    #[error("Future date rejected: {0}")]
    FutureDateRejected(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            DomainError::Forbidden(_) => ErrorCode::Forbidden,
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            DomainError::JournalEntryNotFound(_) => ErrorCode::JournalEntryNotFound,
            DomainError::NotFound(_) => ErrorCode::ResourceNotFound,
            DomainError::InvalidDate(_) => ErrorCode::InvalidDate,
            DomainError::AlreadyCompleted(_) => ErrorCode::AlreadyCompleted,
            DomainError::NotCompleted(_) => ErrorCode::NotCompleted,
            DomainError::FutureDateRejected(_) => ErrorCode::FutureDateRejected,
            DomainError::Conflict(_) => ErrorCode::DuplicateResource,
            DomainError::ConcurrentModification(_) => ErrorCode::ConcurrentModification,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidCredentials(msg)
            | DomainError::Forbidden(msg)
            | DomainError::UserNotFound(msg)
            | DomainError::HabitNotFound(msg)
            | DomainError::JournalEntryNotFound(msg)
            | DomainError::NotFound(msg)
            | DomainError::InvalidDate(msg)
            | DomainError::AlreadyCompleted(msg)
            | DomainError::NotCompleted(msg)
            | DomainError::FutureDateRejected(msg)
            | DomainError::Conflict(msg)
            | DomainError::ConcurrentModification(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
