//! Application state shared across entry points.

use std::sync::Arc;

use crate::config::Config;
use crate::nav::{NavService, ViewRegistry, builtin_views};
use crate::permission::{
    FilePermissionSource, PermissionSource, StaticPermissionSource, default_permissions,
};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Permission source for the current session.
    source: Box<dyn PermissionSource>,

    /// Process-wide view registry.
    views: Arc<ViewRegistry>,

    /// Memoizing route compiler.
    nav: NavService,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: &Config) -> Self {
        let source: Box<dyn PermissionSource> = match &config.permissions_file {
            Some(path) => Box::new(FilePermissionSource::new(path.clone())),
            None => Box::new(StaticPermissionSource::new(default_permissions())),
        };

        let views = Arc::new(builtin_views());
        let nav = NavService::new(views.clone());

        Self {
            inner: Arc::new(AppStateInner { source, views, nav }),
        }
    }

    /// Get the permission source.
    pub fn permission_source(&self) -> &dyn PermissionSource {
        self.inner.source.as_ref()
    }

    /// Get the view registry.
    pub fn views(&self) -> &Arc<ViewRegistry> {
        &self.inner.views
    }

    /// Get the navigation service.
    pub fn nav(&self) -> &NavService {
        &self.inner.nav
    }
}
