use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use habitflow_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::Serialize;
use tracing::{error, warn};

/// Structured error body returned by every endpoint
///
/// - `error`: human-readable message
/// - `code`: numeric error code (1xxx-6xxx range)
/// - `severity`: for UI presentation
/// - `recoverable`: whether a retry may succeed
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,

    pub error: String,

    pub code: u16,

    pub severity: ErrorSeverity,

    pub recoverable: bool,
}

/// HTTP status for an error code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError
        | ErrorCode::InvalidInput
        | ErrorCode::InvalidDate
        | ErrorCode::FutureDateRejected
        | ErrorCode::AlreadyCompleted
        | ErrorCode::NotCompleted => StatusCode::BAD_REQUEST,

        ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,

        ErrorCode::UserNotFound
        | ErrorCode::HabitNotFound
        | ErrorCode::JournalEntryNotFound
        | ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,

        ErrorCode::DuplicateResource | ErrorCode::ConcurrentModification => StatusCode::CONFLICT,

        ErrorCode::RepositoryError
        | ErrorCode::DataIntegrityError
        | ErrorCode::SerializationError
        | ErrorCode::InfrastructureError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: status_for(error_code),
            error: message.into(),
            code: error_code.code(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ResourceNotFound, message)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let code = err.code();
        // Not-found variants carry only the identifier
        let message = match code {
            ErrorCode::UserNotFound
            | ErrorCode::HabitNotFound
            | ErrorCode::JournalEntryNotFound => err.to_string(),
            _ => err.message().to_string(),
        };
        Self::from_code(code, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = self;
        if body.status.is_server_error() {
            error!("[api] {} [{}] {}", body.status, body.code, body.error);
            body.error = "Internal server error".to_string();
        } else if body.status == StatusCode::CONFLICT {
            warn!("[api] {} [{}] {}", body.status, body.code, body.error);
        }

        (body.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_domain_error() {
        let api_err: ApiError = DomainError::HabitNotFound("abc".to_string()).into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.code, 2002);
        assert_eq!(api_err.error, "Habit not found: abc");
        assert_eq!(api_err.severity, ErrorSeverity::Info);
        assert!(!api_err.recoverable);
    }

    #[test]
    fn test_completion_errors_are_bad_requests() {
        for err in [
            DomainError::AlreadyCompleted("x".to_string()),
            DomainError::NotCompleted("x".to_string()),
            DomainError::FutureDateRejected("x".to_string()),
            DomainError::InvalidDate("x".to_string()),
        ] {
            assert_eq!(ApiError::from(err).status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::InvalidCredentials("x".into()), StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (DomainError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                DomainError::ConcurrentModification("x".into()),
                StatusCode::CONFLICT,
            ),
            (
                DomainError::Repository("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_helpers() {
        assert_eq!(ApiError::validation("bad").code, 6001);
        assert_eq!(ApiError::not_found("gone").code, 2004);
        let infra = ApiError::infrastructure("down");
        assert_eq!(infra.code, 5001);
        assert!(infra.recoverable);
        assert_eq!(infra.to_string(), "[5001] down");
    }
}
