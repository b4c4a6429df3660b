//! Permission entry model.
//!
//! An entry describes one navigable node: either a menu item bound to a
//! view or a catalogue grouping other nodes. Entries may be pre-nested
//! via `children` or linked via `parent_id`; both shapes are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppResult;

/// Node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    /// Navigable leaf (or sub-menu) bound to a view.
    Menu,
    /// Pure grouping container with no view of its own.
    Catalogue,
}

/// A declarative navigation node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// Unique identifier within the whole permission set.
    pub id: String,

    /// Identifier of the containing node; `None` for roots. The upstream
    /// source emits an empty string for roots, normalized away here.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub parent_id: Option<String>,

    /// Node kind.
    pub kind: PermissionKind,

    /// Single path segment, relative to the parent.
    pub route: String,

    /// Logical view path (slash-separated), for menu entries that render.
    #[serde(default)]
    pub component: Option<String>,

    /// Display label (translation key).
    #[serde(default)]
    pub label: String,

    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,

    /// Sibling sort weight, consumed at render time.
    #[serde(default)]
    pub order: Option<i32>,

    /// Hidden from menu rendering.
    #[serde(default)]
    pub hidden: bool,

    /// Hidden from the tab bar.
    #[serde(default)]
    pub hide_tab: Option<bool>,

    /// Non-clickable entry.
    #[serde(default)]
    pub disabled: bool,

    /// External frame source for embedded views.
    #[serde(default)]
    pub frame_src: Option<String>,

    /// Marked as newly introduced in the UI.
    #[serde(default)]
    pub new_feature: bool,

    /// Pre-nested child entries.
    #[serde(default)]
    pub children: Vec<PermissionEntry>,
}

impl PermissionEntry {
    /// Whether this entry sits at the root of the tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Parse a JSON permission document into entries.
///
/// This is the ingestion boundary: kind tags and field shapes are checked
/// here, not inside the recursive transformer.
pub fn parse_permissions(json: &str) -> AppResult<Vec<PermissionEntry>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_sparse_document() {
        let json = r#"[
            {"id": "programs", "kind": "menu", "route": "programs"}
        ]"#;

        let entries = parse_permissions(json).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.kind, PermissionKind::Menu);
        assert!(entry.parent_id.is_none());
        assert!(entry.component.is_none());
        assert!(!entry.hidden);
        assert!(entry.children.is_empty());
    }

    #[test]
    fn empty_parent_id_is_root() {
        let json = r#"[
            {"id": "a", "parent_id": "", "kind": "menu", "route": "a"},
            {"id": "b", "parent_id": "a", "kind": "menu", "route": "b"}
        ]"#;

        let entries = parse_permissions(json).unwrap();
        assert!(entries[0].is_root());
        assert_eq!(entries[1].parent_id.as_deref(), Some("a"));
    }

    #[test]
    fn parse_nested_children() {
        let json = r#"[
            {"id": "content", "kind": "catalogue", "route": "content", "children": [
                {"id": "tasks", "parent_id": "content", "kind": "menu", "route": "tasks",
                 "component": "content/tasks/index"}
            ]}
        ]"#;

        let entries = parse_permissions(json).unwrap();
        assert_eq!(entries[0].kind, PermissionKind::Catalogue);
        assert_eq!(entries[0].children.len(), 1);
        assert_eq!(
            entries[0].children[0].component.as_deref(),
            Some("content/tasks/index")
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"[{"id": "x", "kind": "widget", "route": "x"}]"#;
        assert!(parse_permissions(json).is_err());
    }
}
