//! Permission -> route transformation.
//!
//! Kind-dispatched compilation: catalogues become grouping containers
//! with a first-child redirect, menus become lazily loaded views. A
//! broken entry degrades to an elementless or root-placed node and is
//! logged; it never takes down the rest of the tree.

use tracing::error;

use crate::permission::{PermissionEntry, PermissionKind};

use super::flatten::FlatIndex;
use super::path::route_path;
use super::route::{Element, LoadingFallback, RouteMeta, RouteNode};
use super::views::ViewRegistry;

/// Compile a permission sequence into router-ready nodes.
///
/// Pure modulo the asynchronous loads it wires but never executes:
/// identical input yields structurally identical output, and input
/// entries are never mutated.
pub fn compile_routes(entries: &[PermissionEntry], views: &ViewRegistry) -> Vec<RouteNode> {
    let index = FlatIndex::from_entries(entries);
    compile_level(entries, &index, views)
}

fn compile_level(
    entries: &[PermissionEntry],
    index: &FlatIndex<'_>,
    views: &ViewRegistry,
) -> Vec<RouteNode> {
    entries
        .iter()
        .map(|entry| match entry.kind {
            PermissionKind::Catalogue => catalogue_route(entry, index, views),
            PermissionKind::Menu => menu_route(entry, index, views),
        })
        .collect()
}

/// Strip a stray leading slash so child paths stay relative.
fn relative(route: &str) -> String {
    route.strip_prefix('/').unwrap_or(route).to_string()
}

/// Shared node skeleton: normalized relative path plus metadata.
fn base_route(entry: &PermissionEntry, index: &FlatIndex<'_>) -> RouteNode {
    RouteNode {
        path: relative(&entry.route),
        index: false,
        element: None,
        children: Vec::new(),
        meta: Some(RouteMeta {
            key: route_path(entry, index),
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            hide_menu: entry.hidden,
            hide_tab: entry.hide_tab.unwrap_or(false),
            disabled: entry.disabled,
            frame_src: entry.frame_src.clone(),
            new_feature: entry.new_feature,
            order: entry.order,
        }),
    }
}

fn catalogue_route(
    entry: &PermissionEntry,
    index: &FlatIndex<'_>,
    views: &ViewRegistry,
) -> RouteNode {
    let mut node = base_route(entry, index);

    // Catalogues never appear in the tab bar.
    if let Some(meta) = node.meta.as_mut() {
        meta.hide_tab = true;
    }

    // Root catalogues provide the mount point for all descendants.
    if entry.is_root() {
        node.element = Some(Element::Outlet {
            fallback: LoadingFallback,
        });
    }

    node.children = compile_level(&entry.children, index, views);

    // Visiting a grouping path with no explicit child selection lands on
    // the first declared child, regardless of order or hidden flags.
    if let Some(first) = entry.children.first() {
        node.children.insert(
            0,
            RouteNode {
                path: String::new(),
                index: true,
                element: Some(Element::Redirect {
                    to: relative(&first.route),
                }),
                children: Vec::new(),
                meta: None,
            },
        );
    }

    node
}

fn menu_route(entry: &PermissionEntry, index: &FlatIndex<'_>, views: &ViewRegistry) -> RouteNode {
    let mut node = base_route(entry, index);

    if let Some(component) = entry.component.as_deref() {
        match views.resolve(component) {
            Some(loader) => {
                node.element = Some(match entry.frame_src.clone() {
                    Some(src) => Element::Frame { loader, src },
                    None => Element::View {
                        loader,
                        fallback: LoadingFallback,
                    },
                });
            }
            None => {
                // Elementless node: still navigable structure, no view.
                error!(
                    id = %entry.id,
                    component = %component,
                    "no view module registered for component path"
                );
            }
        }
    }

    // Menu entries may carry sub-menus.
    if !entry.children.is_empty() {
        node.children = compile_level(&entry.children, index, views);
    }

    node
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::nav::views::builtin_views;
    use crate::permission::parse_permissions;

    fn compile(json: &str) -> Vec<RouteNode> {
        let entries = parse_permissions(json).unwrap();
        compile_routes(&entries, &builtin_views())
    }

    #[test]
    fn root_catalogue_gets_outlet_and_hidden_tab() {
        let routes = compile(
            r#"[{"id": "content", "kind": "catalogue", "route": "content", "hide_tab": false}]"#,
        );

        let node = &routes[0];
        assert_eq!(node.element.as_ref().unwrap().kind(), "outlet");
        assert!(node.meta.as_ref().unwrap().hide_tab);
        assert!(node.children.is_empty());
    }

    #[test]
    fn nested_catalogue_has_no_outlet() {
        let routes = compile(
            r#"[
                {"id": "content", "kind": "catalogue", "route": "content", "children": [
                    {"id": "grading", "parent_id": "content", "kind": "catalogue", "route": "grading"}
                ]}
            ]"#,
        );

        // children[0] is the synthetic redirect, children[1] the catalogue.
        let nested = &routes[0].children[1];
        assert!(nested.element.is_none());
    }

    #[test]
    fn frame_src_parameterizes_the_element() {
        let routes = compile(
            r#"[{"id": "docs", "kind": "menu", "route": "docs",
                 "component": "content/tasks/index",
                 "frame_src": "https://docs.example.com"}]"#,
        );

        match routes[0].element.as_ref().unwrap() {
            Element::Frame { src, .. } => assert_eq!(src, "https://docs.example.com"),
            other => panic!("expected frame element, got {}", other.kind()),
        }
    }

    #[test]
    fn menu_without_component_is_a_navigation_bucket() {
        let routes = compile(
            r#"[
                {"id": "ops", "kind": "menu", "route": "ops", "children": [
                    {"id": "tasks", "parent_id": "ops", "kind": "menu", "route": "tasks",
                     "component": "content/tasks/index"}
                ]}
            ]"#,
        );

        let node = &routes[0];
        assert!(node.element.is_none());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].element.as_ref().unwrap().kind(), "view");
    }

    #[test]
    fn leading_slash_in_route_is_normalized() {
        let routes = compile(
            r#"[{"id": "tasks", "kind": "menu", "route": "/tasks",
                 "component": "content/tasks/index"}]"#,
        );

        assert_eq!(routes[0].path, "tasks");
    }
}
