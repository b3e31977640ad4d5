use std::env;
use std::time::Duration;

use auth::PasswordConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub env: Env,
    pub database: DatabaseConfig,
    pub grpc: GrpcConfig,
    pub token: TokenConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

/// Deployment environment, selects the log format.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Local,
    Dev,
    Prod,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GrpcConfig {
    pub port: u16,
    pub timeout_ms: u64,
}

impl GrpcConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    pub ttl_seconds: i64,
}

impl TokenConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.ttl_seconds)
    }
}

fn default_max_connections() -> u32 {
    5
}

/// Upper bound on token lifetime.
const MAX_TOKEN_TTL_SECONDS: i64 = 366 * 24 * 60 * 60;

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO_DATABASE__URL, SSO_GRPC__PORT, etc.)
    /// 2. File named by CONFIG_PATH, if set
    /// 3. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 4. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "local".to_string());

        let mut builder = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        if let Ok(path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&path).required(true));
        }

        // Example: SSO_DATABASE__URL=postgres://... overrides database.url
        let configuration = builder
            .add_source(
                Environment::with_prefix("SSO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that deserialize but cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.ttl_seconds <= 0 || self.token.ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(ConfigError::Message(format!(
                "token.ttl_seconds must be in 1..={}, got {}",
                MAX_TOKEN_TTL_SECONDS, self.token.ttl_seconds
            )));
        }

        if self.grpc.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "grpc.timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
