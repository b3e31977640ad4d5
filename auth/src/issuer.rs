use chrono::Duration;

use crate::jwt::AccessClaims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Issues access tokens scoped to a single application.
///
/// Every application signs with its own secret, so the issuer holds no key
/// material itself: the secret is supplied per call by whoever resolved the
/// application. Only the token lifetime is fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer whose tokens expire `ttl` after issuance.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign an access token for `uid` on application `app_id`.
    ///
    /// # Arguments
    /// * `secret` - Signing secret of application `app_id`
    ///
    /// # Errors
    /// * `EncodingFailed` - Secret is empty, expiry overflows, or encoding failed
    pub fn issue(
        &self,
        uid: i64,
        email: &str,
        app_id: i32,
        secret: &[u8],
    ) -> Result<String, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EncodingFailed(format!(
                "app {} has an empty signing secret",
                app_id
            )));
        }

        let claims = AccessClaims::new(uid, email, app_id, self.ttl)?;
        JwtHandler::new(secret).encode(&claims)
    }

    /// Verify a token against an application's secret and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Token was not signed with `secret`
    /// * `TokenExpired` - Token expiry has passed
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<AccessClaims, JwtError> {
        JwtHandler::new(secret).decode(token)
    }
}
