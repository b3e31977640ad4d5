use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// Process-local storage for tests and local development.
///
/// Email uniqueness is checked and the user inserted under one write lock,
/// mirroring the unique constraint of the relational schema.
#[derive(Default)]
pub struct InMemoryStorage {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    ids_by_email: HashMap<String, UserId>,
    apps: HashMap<AppId, App>,
    last_user_id: i64,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision an application, replacing any app with the same identifier.
    pub async fn add_app(&self, app: App) {
        self.state.write().await.apps.insert(app.id, app);
    }

    /// Set the admin flag of an existing user.
    ///
    /// # Errors
    /// * `UserNotFound` - No user with this identifier
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(StorageError::UserNotFound)?;
        user.is_admin = is_admin;
        Ok(())
    }
}

#[async_trait]
impl UserSaver for InMemoryStorage {
    async fn save_user(&self, email: &str, password_hash: &[u8]) -> Result<UserId, StorageError> {
        let mut state = self.state.write().await;

        if state.ids_by_email.contains_key(email) {
            return Err(StorageError::UserExists);
        }

        state.last_user_id += 1;
        let id = UserId(state.last_user_id);

        state.ids_by_email.insert(email.to_string(), id);
        state.users.insert(
            id,
            User {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_vec(),
                is_admin: false,
            },
        );

        Ok(id)
    }
}

#[async_trait]
impl UserProvider for InMemoryStorage {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let state = self.state.read().await;

        state
            .ids_by_email
            .get(email)
            .and_then(|id| state.users.get(id))
            .cloned()
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        self.state
            .read()
            .await
            .users
            .get(&user_id)
            .map(|user| user.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

#[async_trait]
impl AppProvider for InMemoryStorage {
    async fn app(&self, app_id: AppId) -> Result<App, StorageError> {
        self.state
            .read()
            .await
            .apps
            .get(&app_id)
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}
