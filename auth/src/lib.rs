//! Authentication utilities library
//!
//! Provides the credential and token primitives of the SSO service:
//! - Password hashing (Argon2id, configurable cost)
//! - JWT encoding and validation (HS256)
//! - Application-scoped access token issuing
//!
//! The service defines its own ports and adapts these implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(Duration::hours(1));
//! let secret = b"app_secret_key_at_least_32_bytes_long!";
//!
//! let token = issuer.issue(42, "alice@example.com", 1, secret).unwrap();
//! let claims = issuer.verify(&token, secret).unwrap();
//! assert_eq!(claims.uid, 42);
//! assert_eq!(claims.app_id, 1);
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use jwt::AccessClaims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordConfig;
pub use password::PasswordError;
pub use password::PasswordHasher;
