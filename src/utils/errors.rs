use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error taxonomy. Every variant maps to exactly one HTTP status,
/// and every handler returns `Result<_, AppError>`, so a request gets exactly
/// one response.
#[derive(Debug)]
pub enum AppError {
    /// Bad input shape or field constraint violation.
    Validation(String),
    /// Failed authentication: unknown email, wrong password, missing header.
    Unauthorized(String),
    /// Malformed, unsigned, or tampered token.
    InvalidToken,
    /// Token signature is valid but `exp` has passed.
    TokenExpired,
    /// Valid token presented to an endpoint requiring a different role.
    Forbidden(String),
    /// Unknown course or other missing resource.
    NotFound(String),
    /// Signup with an email that already has an account.
    DuplicateEmail,
    /// Second purchase of the same course by the same account.
    AlreadyPurchased,
    /// bcrypt failure while hashing or verifying.
    HashingError(String),
    /// Database connection or query failure.
    StoreUnavailable(String),
    /// Any other internal failure, e.g. token signing.
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::InvalidToken | AppError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail | AppError::AlreadyPurchased => StatusCode::CONFLICT,
            AppError::HashingError(_) | AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal variants keep their detail in the logs
    /// and return a generic message here.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidToken => "Invalid token".to_string(),
            AppError::TokenExpired => "Token expired".to_string(),
            AppError::DuplicateEmail => "An account with this email already exists".to_string(),
            AppError::AlreadyPurchased => "Course already purchased".to_string(),
            AppError::HashingError(_) | AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::HashingError(detail)
        | AppError::StoreUnavailable(detail)
        | AppError::Internal(detail) = &self
        {
            tracing::error!(error = %detail, "internal error");
        }

        let body = Json(json!({
            "error": self.message()
        }));

        (self.status_code(), body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::HashingError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Forbidden("role".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("course".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::AlreadyPurchased.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::HashingError("rng".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StoreUnavailable("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = AppError::StoreUnavailable("connection refused at 10.0.0.5".into());
        assert_eq!(err.message(), "Internal server error");

        let err = AppError::HashingError("cost parameter rejected".into());
        assert_eq!(err.message(), "Internal server error");
    }
}
