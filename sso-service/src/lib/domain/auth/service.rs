use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Duration;
use tokio::sync::OnceCell;
use tracing::Instrument;
use tracing::Span;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Holds no mutable state, so one instance serves concurrent requests.
pub struct AuthService<UP, US, AP>
where
    UP: UserProvider,
    US: UserSaver,
    AP: AppProvider,
{
    user_provider: Arc<UP>,
    user_saver: Arc<US>,
    app_provider: Arc<AP>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    dummy_hash: OnceCell<Vec<u8>>,
    span: Span,
}

/// Password hashed once and checked when the email is unknown, so both
/// login failures pay one Argon2 verification.
const DUMMY_PASSWORD: &str = "sso-dummy-password";

impl<UP, US, AP> AuthService<UP, US, AP>
where
    UP: UserProvider,
    US: UserSaver,
    AP: AppProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `span` - Parent span every operation logs under
    /// * `user_provider` - User lookup implementation
    /// * `user_saver` - User persistence implementation
    /// * `app_provider` - Application lookup implementation
    /// * `password_hasher` - Hasher configured with the deployment's cost parameters
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(
        span: Span,
        user_provider: Arc<UP>,
        user_saver: Arc<US>,
        app_provider: Arc<AP>,
        password_hasher: PasswordHasher,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_provider,
            user_saver,
            app_provider,
            password_hasher,
            token_issuer: TokenIssuer::new(token_ttl),
            dummy_hash: OnceCell::new(),
            span,
        }
    }

    // Argon2 is CPU-bound; keep it off the async worker threads.
    async fn hash_password(&self, op: &'static str, password: &str) -> Result<Vec<u8>, AuthError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::internal(op, e))?
            .map(String::into_bytes)
            .map_err(|e| AuthError::internal(op, e))
    }

    async fn verify_password(
        &self,
        op: &'static str,
        password: &str,
        password_hash: Vec<u8>,
    ) -> Result<bool, AuthError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let hash = String::from_utf8(password_hash)
                .map_err(|_| "stored password hash is not valid UTF-8".to_string())?;
            hasher.verify(&password, &hash).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| AuthError::internal(op, e))?
        .map_err(|e| AuthError::internal(op, e))
    }

    async fn verify_dummy_password(
        &self,
        op: &'static str,
        password: &str,
    ) -> Result<(), AuthError> {
        let dummy_hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash_password(op, DUMMY_PASSWORD))
            .await?;

        self.verify_password(op, password, dummy_hash.clone())
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl<UP, US, AP> AuthServicePort for AuthService<UP, US, AP>
where
    UP: UserProvider,
    US: UserSaver,
    AP: AppProvider,
{
    async fn login(
        &self,
        email: &str,
        password: &str,
        app_id: AppId,
    ) -> Result<String, AuthError> {
        const OP: &str = "auth.login";
        let span = tracing::info_span!(parent: &self.span, "login", op = OP, email, %app_id);

        async move {
            tracing::info!("logging in user");

            let user = match self.user_provider.user(email).await {
                Ok(user) => user,
                Err(StorageError::UserNotFound) => {
                    tracing::warn!("user not found");
                    if let Err(e) = self.verify_dummy_password(OP, password).await {
                        tracing::error!(error = %e, "failed to verify dummy password");
                    }
                    return Err(AuthError::InvalidCredentials);
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to get user");
                    return Err(AuthError::internal(OP, e));
                }
            };

            let user_id = user.id;
            if !self
                .verify_password(OP, password, user.password_hash)
                .await
                .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to verify password"))?
            {
                tracing::warn!(%user_id, "password mismatch");
                return Err(AuthError::InvalidCredentials);
            }

            let app = match self.app_provider.app(app_id).await {
                Ok(app) => app,
                Err(StorageError::AppNotFound) => {
                    tracing::warn!("app not found");
                    return Err(AuthError::AppNotFound(app_id));
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to get app");
                    return Err(AuthError::internal(OP, e));
                }
            };

            let token = self
                .token_issuer
                .issue(user_id.0, &user.email, app.id.0, &app.secret)
                .map_err(|e| {
                    tracing::error!(error = %e, %user_id, "failed to generate token");
                    AuthError::internal(OP, e)
                })?;

            tracing::info!(%user_id, "user logged in");
            Ok(token)
        }
        .instrument(span)
        .await
    }

    async fn register_new_user(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        const OP: &str = "auth.register_new_user";
        let span = tracing::info_span!(parent: &self.span, "register_new_user", op = OP, email);

        async move {
            tracing::info!("registering user");

            let password_hash = self
                .hash_password(OP, password)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "failed to hash password"))?;

            match self.user_saver.save_user(email, &password_hash).await {
                Ok(user_id) => {
                    tracing::info!(%user_id, "user registered");
                    Ok(user_id)
                }
                Err(StorageError::UserExists) => {
                    tracing::warn!("user already exists");
                    Err(AuthError::UserAlreadyExists)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to save user");
                    Err(AuthError::internal(OP, e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn check_is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        const OP: &str = "auth.check_is_admin";
        let span = tracing::info_span!(parent: &self.span, "check_is_admin", op = OP, %user_id);

        async move {
            tracing::info!("checking if user is admin");

            match self.user_provider.is_admin(user_id).await {
                Ok(is_admin) => {
                    tracing::info!(is_admin, "checked if user is admin");
                    Ok(is_admin)
                }
                Err(StorageError::UserNotFound) => {
                    tracing::warn!("user not found");
                    Err(AuthError::InvalidAppId)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to check if user is admin");
                    Err(AuthError::internal(OP, e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
