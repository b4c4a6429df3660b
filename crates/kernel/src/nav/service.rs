//! Memoized route compilation service.
//!
//! The compiler itself is pure; this service owns the process-wide cache
//! keyed by permission-set fingerprint so an unchanged permission set
//! never recompiles.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::permission::PermissionEntry;

use super::route::RouteNode;
use super::transform::compile_routes;
use super::views::ViewRegistry;

/// Compiles permission sets into route trees, memoizing by input identity.
#[derive(Clone)]
pub struct NavService {
    inner: Arc<NavServiceInner>,
}

struct NavServiceInner {
    /// Process-wide view registry.
    views: Arc<ViewRegistry>,

    /// Cache of permission-set fingerprint -> compiled tree.
    compiled: DashMap<u64, Arc<Vec<RouteNode>>>,
}

impl NavService {
    /// Create a service over a view registry.
    pub fn new(views: Arc<ViewRegistry>) -> Self {
        Self {
            inner: Arc::new(NavServiceInner {
                views,
                compiled: DashMap::new(),
            }),
        }
    }

    /// Compile (or reuse) the route tree for a permission set.
    pub fn routes_for(&self, permissions: &[PermissionEntry]) -> Arc<Vec<RouteNode>> {
        let key = fingerprint(permissions);

        if let Some(cached) = self.inner.compiled.get(&key) {
            debug!(key, "navigation cache hit");
            return cached.value().clone();
        }

        let routes = Arc::new(compile_routes(permissions, &self.inner.views));
        self.inner.compiled.insert(key, routes.clone());
        debug!(key, roots = routes.len(), "navigation tree compiled");
        routes
    }

    /// Drop every cached tree.
    ///
    /// Call this when the permission set changes identity. Superseded
    /// trees are simply discarded; an in-flight view load resolving
    /// against one has no side effects.
    pub fn invalidate_all(&self) {
        self.inner.compiled.clear();
    }

    /// Number of cached trees (for monitoring).
    pub fn cache_size(&self) -> usize {
        self.inner.compiled.len()
    }

    /// The view registry backing compilation.
    pub fn views(&self) -> &Arc<ViewRegistry> {
        &self.inner.views
    }
}

/// Structural fingerprint of a permission sequence.
fn fingerprint(permissions: &[PermissionEntry]) -> u64 {
    let mut hasher = DefaultHasher::new();
    permissions.hash(&mut hasher);
    hasher.finish()
}
