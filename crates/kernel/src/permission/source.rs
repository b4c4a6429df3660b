//! Permission sources.
//!
//! The navigation tree is driven by whatever permission set the
//! authorization collaborator supplies for the current session; when it
//! supplies nothing, the built-in default set applies.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::AppResult;

use super::{PermissionEntry, default_permissions, parse_permissions};

/// Supplies the ordered permission sequence for the current session.
#[async_trait]
pub trait PermissionSource: Send + Sync {
    /// Fetch the permission sequence.
    async fn permissions(&self) -> AppResult<Vec<PermissionEntry>>;
}

/// Fixed in-memory permission set.
pub struct StaticPermissionSource {
    entries: Vec<PermissionEntry>,
}

impl StaticPermissionSource {
    /// Create a source over a fixed entry sequence.
    pub fn new(entries: Vec<PermissionEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl PermissionSource for StaticPermissionSource {
    async fn permissions(&self) -> AppResult<Vec<PermissionEntry>> {
        Ok(self.entries.clone())
    }
}

/// Permission set read from a JSON document on disk.
pub struct FilePermissionSource {
    path: PathBuf,
}

impl FilePermissionSource {
    /// Create a source reading from the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PermissionSource for FilePermissionSource {
    async fn permissions(&self) -> AppResult<Vec<PermissionEntry>> {
        debug!(path = %self.path.display(), "loading permission document");
        let raw = tokio::fs::read_to_string(&self.path).await?;
        parse_permissions(&raw)
    }
}

/// Load permissions from a source, falling back to the default set when
/// the source yields an empty sequence.
pub async fn load_permissions(source: &dyn PermissionSource) -> AppResult<Vec<PermissionEntry>> {
    let entries = source.permissions().await?;
    if entries.is_empty() {
        info!("permission source yielded nothing, using default set");
        return Ok(default_permissions());
    }
    Ok(entries)
}
