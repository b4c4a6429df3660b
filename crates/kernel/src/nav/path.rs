//! Absolute route path derivation.

use std::collections::HashSet;

use tracing::warn;

use crate::permission::PermissionEntry;

use super::flatten::FlatIndex;

/// Build the absolute navigation path for an entry by walking its parent
/// chain to the root and joining route segments root-first.
///
/// Dangling parents and cyclic chains are configuration defects: the walk
/// stops where it is, logs, and returns the path accumulated so far. A
/// broken entry must never fail the whole compilation.
pub fn route_path(entry: &PermissionEntry, index: &FlatIndex<'_>) -> String {
    let mut segments = vec![entry.route.as_str()];
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(entry.id.as_str());

    let mut current = entry;
    while let Some(parent_id) = current.parent_id.as_deref() {
        let Some(parent) = index.get(parent_id) else {
            warn!(
                id = %current.id,
                parent = %parent_id,
                "parent permission not found, treating node as root"
            );
            break;
        };
        if !visited.insert(parent.id.as_str()) {
            warn!(id = %entry.id, parent = %parent_id, "cyclic permission ancestry, truncating path");
            break;
        }
        segments.push(parent.route.as_str());
        current = parent;
    }

    segments.reverse();
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::permission::parse_permissions;

    #[test]
    fn root_entry_path() {
        let entries =
            parse_permissions(r#"[{"id": "tasks", "kind": "menu", "route": "tasks"}]"#).unwrap();
        let index = FlatIndex::from_entries(&entries);
        assert_eq!(route_path(&entries[0], &index), "/tasks");
    }

    #[test]
    fn nested_path_is_root_first() {
        let entries = parse_permissions(
            r#"[
                {"id": "content", "kind": "catalogue", "route": "content", "children": [
                    {"id": "programs", "parent_id": "content", "kind": "menu", "route": "programs",
                     "children": [
                        {"id": "builder", "parent_id": "programs", "kind": "menu", "route": "builder"}
                     ]}
                ]}
            ]"#,
        )
        .unwrap();

        let index = FlatIndex::from_entries(&entries);
        let builder = index.get("builder").unwrap();
        assert_eq!(route_path(builder, &index), "/content/programs/builder");
    }

    #[test]
    fn dangling_parent_degrades_to_root() {
        let entries = parse_permissions(
            r#"[{"id": "orphan", "parent_id": "missing", "kind": "menu", "route": "orphan"}]"#,
        )
        .unwrap();

        let index = FlatIndex::from_entries(&entries);
        assert_eq!(route_path(&entries[0], &index), "/orphan");
    }

    #[test]
    fn cyclic_ancestry_terminates() {
        let entries = parse_permissions(
            r#"[
                {"id": "a", "parent_id": "b", "kind": "menu", "route": "a"},
                {"id": "b", "parent_id": "a", "kind": "menu", "route": "b"}
            ]"#,
        )
        .unwrap();

        let index = FlatIndex::from_entries(&entries);
        // Best-effort partial paths; the important property is termination.
        assert_eq!(route_path(&entries[0], &index), "/b/a");
        assert_eq!(route_path(&entries[1], &index), "/a/b");
    }
}
