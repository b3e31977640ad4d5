use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::JwtError;

/// Claims carried by an application-scoped access token.
///
/// Field names are part of the token format consumed by relying applications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub uid: i64,

    /// Subject email
    pub email: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Application the token was issued for
    pub app_id: i32,
}

impl AccessClaims {
    /// Create claims expiring `ttl` after now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry is not representable
    pub fn new(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        Self::issued_at(uid, email, app_id, Utc::now(), ttl)
    }

    /// Create claims expiring `ttl` after `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry is not representable
    pub fn issued_at(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let exp = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("token ttl of {}s overflows expiry", ttl.num_seconds()))
        })?;

        Ok(Self {
            uid,
            email: email.into(),
            exp: exp.timestamp(),
            app_id,
        })
    }
}
