//! Compiled route tree consumed by the view router.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::views::ViewLoader;

/// Loading indicator shown while a suspended view is being fetched.
///
/// Rendering lives in the host UI layer; the compiler only attaches the
/// marker wherever a load may suspend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFallback;

/// Renderable payload of a compiled route node.
///
/// Variants are opaque wiring for the host router: the compiler
/// parameterizes them but never executes a load or renders anything.
#[derive(Clone)]
pub enum Element {
    /// Lazily loaded view behind a suspense boundary.
    View {
        loader: ViewLoader,
        fallback: LoadingFallback,
    },
    /// Lazily loaded view parameterized with an external frame source.
    Frame { loader: ViewLoader, src: String },
    /// Mount point rendering whichever descendant route is active.
    Outlet { fallback: LoadingFallback },
    /// Unconditional replace-redirect to a relative route.
    Redirect { to: String },
}

impl Element {
    /// Short tag used in diagnostics and tree dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::View { .. } => "view",
            Element::Frame { .. } => "frame",
            Element::Outlet { .. } => "outlet",
            Element::Redirect { .. } => "redirect",
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::View { .. } => f.write_str("View"),
            Element::Frame { src, .. } => f.debug_struct("Frame").field("src", src).finish(),
            Element::Outlet { .. } => f.write_str("Outlet"),
            Element::Redirect { to } => f.debug_struct("Redirect").field("to", to).finish(),
        }
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Element::View { .. } | Element::Outlet { .. } => {
                let mut s = serializer.serialize_struct("Element", 1)?;
                s.serialize_field("kind", self.kind())?;
                s.end()
            }
            Element::Frame { src, .. } => {
                let mut s = serializer.serialize_struct("Element", 2)?;
                s.serialize_field("kind", self.kind())?;
                s.serialize_field("src", src)?;
                s.end()
            }
            Element::Redirect { to } => {
                let mut s = serializer.serialize_struct("Element", 2)?;
                s.serialize_field("kind", self.kind())?;
                s.serialize_field("to", to)?;
                s.end()
            }
        }
    }
}

/// Route metadata consumed by menu rendering and breadcrumb components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Absolute path, unique across the tree for well-formed input.
    pub key: String,

    /// Display label (translation key).
    pub label: String,

    /// Icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Hidden from menu rendering.
    pub hide_menu: bool,

    /// Hidden from the tab bar.
    pub hide_tab: bool,

    /// Non-clickable entry.
    pub disabled: bool,

    /// External frame source for embedded views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_src: Option<String>,

    /// Marked as newly introduced in the UI.
    pub new_feature: bool,

    /// Sibling sort weight, consumed at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// One node of the compiled route tree.
///
/// Owned by the router once produced; the compiler retains no references.
#[derive(Debug, Clone)]
pub struct RouteNode {
    /// Relative path segment (empty for the synthetic index redirect).
    pub path: String,

    /// Index route: matches the parent path with no further segment.
    pub index: bool,

    /// Renderable payload, absent for pure navigation buckets.
    pub element: Option<Element>,

    /// Child routes in declared order.
    pub children: Vec<RouteNode>,

    /// Metadata; absent on the synthetic index redirect.
    pub meta: Option<RouteMeta>,
}

impl Serialize for RouteNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("RouteNode", 5)?;
        s.serialize_field("path", &self.path)?;
        s.serialize_field("index", &self.index)?;
        s.serialize_field("element", &self.element)?;
        s.serialize_field("meta", &self.meta)?;
        s.serialize_field("children", &self.children)?;
        s.end()
    }
}
