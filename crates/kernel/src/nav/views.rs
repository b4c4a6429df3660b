//! View module registry: logical path -> asynchronous loader.
//!
//! The registry is built once at startup from the statically known set of
//! admin screens. The compiler only wires up the *capability* to load a
//! view; nothing is awaited until the router first navigates to a node.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A loaded view module, opaque to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModule {
    /// Module name, unique per screen.
    pub name: String,
}

/// Future resolving to a loaded view module.
pub type ViewFuture = Pin<Box<dyn Future<Output = ViewModule> + Send>>;

/// Zero-argument asynchronous view loader.
pub type ViewLoader = Arc<dyn Fn() -> ViewFuture + Send + Sync>;

/// Registry of all view modules discoverable at startup.
#[derive(Default)]
pub struct ViewRegistry {
    loaders: HashMap<String, ViewLoader>,
}

impl ViewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Register a loader under a logical path.
    pub fn register(&mut self, logical_path: impl Into<String>, loader: ViewLoader) {
        self.loaders.insert(logical_path.into(), loader);
    }

    /// Resolve a loader for a logical component path.
    ///
    /// A leading slash is accepted and normalized away before lookup. A
    /// miss returns `None`; diagnostics belong to the caller, which knows
    /// the owning entry.
    pub fn resolve(&self, logical_path: &str) -> Option<ViewLoader> {
        let normalized = logical_path.strip_prefix('/').unwrap_or(logical_path);
        self.loaders.get(normalized).cloned()
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.loaders.len())
            .finish()
    }
}

/// Create a loader that resolves immediately to a named module.
///
/// The asynchronous shape is what the router relies on to defer work to
/// first navigation; the modules themselves carry no I/O here.
pub fn ready_view(name: &'static str) -> ViewLoader {
    Arc::new(move || -> ViewFuture {
        Box::pin(std::future::ready(ViewModule {
            name: name.to_string(),
        }))
    })
}

/// All admin screens of the educational platform.
const BUILTIN_VIEWS: &[&str] = &[
    "content/dashboard/index",
    "content/programs/index",
    "content/programs/builder/index",
    "content/levels/index",
    "content/subjects/index",
    "content/subjects/builder/index",
    "content/lessons/index",
    "content/tasks/index",
    "content/assignments/index",
    "content/assignments/builder",
    "content/assignment-responses/index",
    "content/assignment-responses/show",
    "content/subscriptions/index",
];

/// Build the process-wide registry of every built-in admin screen.
pub fn builtin_views() -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    for &name in BUILTIN_VIEWS {
        registry.register(name, ready_view(name));
    }
    registry
}
