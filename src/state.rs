//! Shared, read-only application state.

use crate::config::Config;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// State handed to every handler and middleware via `State<AppState>`.
///
/// Cloning is cheap; nothing in here changes after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// SHA-256 hex digest of the configured access password
    pub password_digest: Arc<str>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let password_digest = sha256_hex(&config.access_password).into();
        Self {
            config: Arc::new(config),
            password_digest,
        }
    }
}

/// Lowercase hex SHA-256 of `input`.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
