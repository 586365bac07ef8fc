//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `TEMPLATE_PATH` (optional): underwriting template workbook, defaults to
///   `templates/underwriting_template.xlsx`
/// - `ACCESS_PASSWORD` (optional): shared secret for the access gate, defaults to `1234`
/// - `MAX_UPLOAD_BYTES` (optional): request body limit, defaults to 10 MiB
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    #[serde(default = "default_access_password")]
    pub access_password: String,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_template_path() -> PathBuf {
    PathBuf::from("templates/underwriting_template.xlsx")
}

/// Placeholder secret. The gate is not a security boundary.
fn default_access_password() -> String {
    "1234".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into expected types
    /// (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: template_path -> TEMPLATE_PATH
        envy::from_env::<Config>()
    }
}
