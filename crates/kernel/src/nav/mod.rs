//! Navigation route compilation.
//!
//! Turns a declarative permission sequence into the lazily-loadable route
//! tree consumed by the view router:
//! - flattening into a by-id index for ancestor lookups
//! - absolute path derivation by parent-chain walk
//! - logical path -> asynchronous view loader resolution
//! - kind-dispatched transformation into route nodes
//! - configuration defect reporting for operator tooling

mod check;
mod flatten;
mod path;
mod route;
mod service;
mod transform;
mod views;

pub use check::{Defect, check_permissions};
pub use flatten::FlatIndex;
pub use path::route_path;
pub use route::{Element, LoadingFallback, RouteMeta, RouteNode};
pub use service::NavService;
pub use transform::compile_routes;
pub use views::{ViewFuture, ViewLoader, ViewModule, ViewRegistry, builtin_views, ready_view};
