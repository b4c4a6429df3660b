//! Application error types.

use thiserror::Error;

/// Application errors.
///
/// These cover the ingestion boundary only; configuration defects inside
/// a parsed permission set (dangling parents, unresolved views, cycles,
/// duplicate ids) are recovered locally by the compiler and surfaced as
/// diagnostics, never as errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read permission document")]
    Io(#[from] std::io::Error),

    #[error("failed to parse permission document")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
