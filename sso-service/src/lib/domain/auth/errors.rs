use thiserror::Error;

use crate::domain::auth::models::AppId;

/// Signals reported by storage providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("user not found")]
    UserNotFound,

    #[error("user already exists")]
    UserExists,

    #[error("app not found")]
    AppNotFound,

    #[error("database error: {0}")]
    Database(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; callers cannot tell the two apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    /// Admin check on an identifier with no user behind it.
    #[error("invalid app id")]
    InvalidAppId,

    #[error("app not found: {0}")]
    AppNotFound(AppId),

    #[error("{op}: {message}")]
    Internal { op: &'static str, message: String },
}

impl AuthError {
    pub(crate) fn internal(op: &'static str, err: impl ToString) -> Self {
        AuthError::Internal {
            op,
            message: err.to_string(),
        }
    }
}
