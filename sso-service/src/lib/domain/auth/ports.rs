use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for authentication service operations.
///
/// Futures returned by these methods may be dropped at any await point to
/// cancel the operation; no state outlives a single call.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue an access token for an application.
    ///
    /// # Arguments
    /// * `email` - Account email, matched exactly as stored
    /// * `password` - Plaintext password
    /// * `app_id` - Application the token is requested for
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - No application with this identifier
    /// * `Internal` - Storage, hashing or signing failed
    async fn login(&self, email: &str, password: &str, app_id: AppId)
        -> Result<String, AuthError>;

    /// Register a new user.
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register_new_user(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    /// Report whether a user holds the admin flag.
    ///
    /// # Errors
    /// * `InvalidAppId` - No user with this identifier
    /// * `Internal` - Storage failed
    async fn check_is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}

/// Read access to users.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this email
    /// * `Database` - Database operation failed
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Retrieve the admin flag of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    /// * `Database` - Database operation failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError>;
}

/// Write access to users.
#[async_trait]
pub trait UserSaver: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of `email` is enforced atomically by the store.
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `UserExists` - Email is already registered
    /// * `Database` - Database operation failed
    async fn save_user(&self, email: &str, password_hash: &[u8]) -> Result<UserId, StorageError>;
}

/// Read access to applications.
#[async_trait]
pub trait AppProvider: Send + Sync + 'static {
    /// Retrieve application by identifier.
    ///
    /// # Errors
    /// * `AppNotFound` - No application with this identifier
    /// * `Database` - Database operation failed
    async fn app(&self, app_id: AppId) -> Result<App, StorageError>;
}
