use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::auth::errors::StorageError;
use crate::domain::auth::models::App;
use crate::domain::auth::models::AppId;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AppProvider;
use crate::domain::auth::ports::UserProvider;
use crate::domain::auth::ports::UserSaver;

/// PostgreSQL-backed storage for users and applications.
///
/// Implements every provider port, so a single instance is shared by the
/// auth service for all three roles.
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: Vec<u8>,
    is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            email: row.email,
            password_hash: row.pass_hash,
            is_admin: row.is_admin,
        }
    }
}

#[derive(FromRow)]
struct AppRow {
    id: i32,
    name: String,
    secret: Vec<u8>,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        Self {
            id: AppId(row.id),
            name: row.name,
            secret: row.secret,
        }
    }
}

fn database_error(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

#[async_trait]
impl UserSaver for PostgresStorage {
    async fn save_user(&self, email: &str, password_hash: &[u8]) -> Result<UserId, StorageError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map(UserId)
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StorageError::UserExists;
                }
            }
            database_error(e)
        })
    }
}

#[async_trait]
impl UserProvider for PostgresStorage {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(User::from)
        .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(StorageError::UserNotFound)
    }
}

#[async_trait]
impl AppProvider for PostgresStorage {
    async fn app(&self, app_id: AppId) -> Result<App, StorageError> {
        sqlx::query_as::<_, AppRow>(
            r#"
            SELECT id, name, secret
            FROM apps
            WHERE id = $1
            "#,
        )
        .bind(app_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(App::from)
        .ok_or(StorageError::AppNotFound)
    }
}
