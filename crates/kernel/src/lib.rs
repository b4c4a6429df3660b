//! Academy Admin Kernel Library
//!
//! Compiles declarative permission entries into the lazily-loadable
//! navigation tree consumed by the admin view router. The `academy`
//! binary provides CLI tooling over the same library.

pub mod config;
pub mod error;
pub mod nav;
pub mod permission;
pub mod state;
