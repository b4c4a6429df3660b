//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a JSON permission document. When unset, the built-in
    /// default permission set is used.
    pub permissions_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let permissions_file = env::var("PERMISSIONS_FILE").ok().map(PathBuf::from);

        Self { permissions_file }
    }
}
