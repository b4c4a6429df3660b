//! Permission entries: the declarative source of the navigation tree.
//!
//! Entries arrive from an authorization collaborator (or the built-in
//! default set) once per session and are treated as immutable input to
//! the route compiler.

mod defaults;
mod entry;
mod source;

pub use defaults::default_permissions;
pub use entry::{PermissionEntry, PermissionKind, parse_permissions};
pub use source::{
    FilePermissionSource, PermissionSource, StaticPermissionSource, load_permissions,
};
