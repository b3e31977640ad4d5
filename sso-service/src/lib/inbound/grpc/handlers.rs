use std::future::Future;
use std::time::Duration;

use tonic::Status;

use crate::domain::auth::errors::AuthError;

pub mod is_admin;
pub mod login;
pub mod register;

/// Wire mapping of the auth error taxonomy.
///
/// Internal details stay in the logs; clients only see a generic message.
impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Status::invalid_argument("invalid credentials"),
            AuthError::AppNotFound(_) => Status::not_found("app not found"),
            AuthError::UserAlreadyExists => Status::already_exists("user already exists"),
            AuthError::InvalidAppId => Status::not_found("user not found"),
            AuthError::Internal { .. } => Status::internal("internal error"),
        }
    }
}

/// Run a service call under the request deadline.
async fn with_deadline<T, F>(timeout: Duration, call: F) -> Result<T, Status>
where
    F: Future<Output = Result<T, AuthError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(Status::from),
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "request timed out");
            Err(Status::deadline_exceeded("request timed out"))
        }
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<(), Status> {
    if value.is_empty() {
        return Err(Status::invalid_argument(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::auth::models::AppId;

    #[test]
    fn test_error_mapping() {
        let cases = [
            (AuthError::InvalidCredentials, Code::InvalidArgument),
            (AuthError::AppNotFound(AppId(3)), Code::NotFound),
            (AuthError::UserAlreadyExists, Code::AlreadyExists),
            (AuthError::InvalidAppId, Code::NotFound),
            (
                AuthError::Internal {
                    op: "auth.login",
                    message: "connection refused".to_string(),
                },
                Code::Internal,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(Status::from(err).code(), code);
        }
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let status = Status::from(AuthError::Internal {
            op: "auth.register_new_user",
            message: "password authentication failed for user \"postgres\"".to_string(),
        });

        assert_eq!(status.message(), "internal error");
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let result: Result<(), Status> = with_deadline(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert_eq!(result.unwrap_err().code(), Code::DeadlineExceeded);
    }
}
