//! Environment configuration.
//!
//! Variables are read once at startup. Required values produce [`ConfigError::MissingEnvVar`]
//! when absent; values that fail validation produce [`ConfigError::InvalidEnvValue`].

use crate::server::{
    error::config::ConfigError,
    google::{GoogleConfig, GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL, GOOGLE_USERINFO_URL},
};

/// Minimum length in bytes of `SESSION_SECRET`, required to derive the cookie signing key.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

static DEFAULT_DATABASE_URL: &str = "sqlite://userDB.sqlite?mode=rwc";
static DEFAULT_VALKEY_URL: &str = "redis://127.0.0.1:6379";
static DEFAULT_GOOGLE_CALLBACK_URL: &str = "http://localhost:3000/auth/google/secrets";
static DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub session_secret: String,
    pub google: GoogleConfig,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - The session secret is too short or the port isn't a number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str, default: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!(
                    "must be at least {} bytes, got {}",
                    MIN_SESSION_SECRET_LEN,
                    session_secret.len()
                ),
            });
        }

        let port = match lookup("PORT").filter(|value| !value.is_empty()) {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            valkey_url: optional("VALKEY_URL", DEFAULT_VALKEY_URL),
            session_secret,
            google: GoogleConfig {
                client_id: required("GOOGLE_CLIENT_ID")?,
                client_secret: required("GOOGLE_CLIENT_SECRET")?,
                callback_url: optional("GOOGLE_CALLBACK_URL", DEFAULT_GOOGLE_CALLBACK_URL),
                auth_url: optional("GOOGLE_AUTH_URL", GOOGLE_AUTH_URL),
                token_url: optional("GOOGLE_TOKEN_URL", GOOGLE_TOKEN_URL),
                userinfo_url: optional("GOOGLE_USERINFO_URL", GOOGLE_USERINFO_URL),
            },
            port,
        })
    }
}
