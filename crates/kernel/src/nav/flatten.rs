//! Flattening of nested permission entries into a by-id index.

use std::collections::HashMap;

use tracing::warn;

use crate::permission::PermissionEntry;

/// By-identifier lookup table over every entry reachable via `children`.
///
/// Flattening only removes nesting; `id` and `parent_id` stay untouched
/// so ancestry remains derivable. Callers index by id, not position.
#[derive(Debug, Default)]
pub struct FlatIndex<'a> {
    by_id: HashMap<&'a str, &'a PermissionEntry>,
}

impl<'a> FlatIndex<'a> {
    /// Build the index from an ordered entry sequence.
    ///
    /// Duplicate identifiers are a configuration defect: the last entry
    /// in document order wins and the collision is logged.
    pub fn from_entries(entries: &'a [PermissionEntry]) -> Self {
        let mut by_id = HashMap::new();

        // Explicit work list; `children` is owned tree data so the walk
        // cannot loop, but deep nesting must not exhaust the stack.
        let mut work: Vec<&'a PermissionEntry> = entries.iter().rev().collect();
        while let Some(entry) = work.pop() {
            if by_id.insert(entry.id.as_str(), entry).is_some() {
                warn!(id = %entry.id, "duplicate permission id, last entry wins");
            }
            work.extend(entry.children.iter().rev());
        }

        Self { by_id }
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&'a PermissionEntry> {
        self.by_id.get(id).copied()
    }

    /// Number of distinct identifiers indexed.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
