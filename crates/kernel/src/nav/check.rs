//! Configuration defect reporting.
//!
//! The compiler recovers from every defect at runtime; this walk exists
//! for operator tooling that wants defects surfaced as values instead of
//! scattered log lines.

use std::collections::HashSet;
use std::fmt;

use crate::permission::{PermissionEntry, PermissionKind};

use super::flatten::FlatIndex;
use super::views::ViewRegistry;

/// A configuration defect in a permission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// Two entries share an identifier; the last one wins at compile time.
    DuplicateId { id: String },
    /// `parent_id` does not resolve; the entry compiles as a root.
    DanglingParent { id: String, parent_id: String },
    /// Following the parent chain loops back; paths are truncated.
    CyclicAncestry { id: String },
    /// No view module is registered for the component path.
    UnresolvedComponent { id: String, component: String },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::DuplicateId { id } => write!(f, "duplicate permission id '{id}'"),
            Defect::DanglingParent { id, parent_id } => {
                write!(f, "entry '{id}' references missing parent '{parent_id}'")
            }
            Defect::CyclicAncestry { id } => write!(f, "entry '{id}' has cyclic ancestry"),
            Defect::UnresolvedComponent { id, component } => {
                write!(f, "entry '{id}' references unregistered view '{component}'")
            }
        }
    }
}

/// Walk a permission set and report every configuration defect, in
/// document order.
pub fn check_permissions(entries: &[PermissionEntry], views: &ViewRegistry) -> Vec<Defect> {
    let mut defects = Vec::new();

    let mut all: Vec<&PermissionEntry> = Vec::new();
    let mut work: Vec<&PermissionEntry> = entries.iter().rev().collect();
    while let Some(entry) = work.pop() {
        all.push(entry);
        work.extend(entry.children.iter().rev());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for &entry in &all {
        if !seen.insert(entry.id.as_str()) && reported.insert(entry.id.as_str()) {
            defects.push(Defect::DuplicateId {
                id: entry.id.clone(),
            });
        }
    }

    let index = FlatIndex::from_entries(entries);

    for &entry in &all {
        if let Some(parent_id) = entry.parent_id.as_deref() {
            if index.get(parent_id).is_none() {
                defects.push(Defect::DanglingParent {
                    id: entry.id.clone(),
                    parent_id: parent_id.to_string(),
                });
            } else if has_cyclic_ancestry(entry, &index) {
                defects.push(Defect::CyclicAncestry {
                    id: entry.id.clone(),
                });
            }
        }

        if entry.kind == PermissionKind::Menu
            && let Some(component) = entry.component.as_deref()
            && views.resolve(component).is_none()
        {
            defects.push(Defect::UnresolvedComponent {
                id: entry.id.clone(),
                component: component.to_string(),
            });
        }
    }

    defects
}

fn has_cyclic_ancestry(entry: &PermissionEntry, index: &FlatIndex<'_>) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(entry.id.as_str());

    let mut current = entry;
    while let Some(parent_id) = current.parent_id.as_deref() {
        let Some(parent) = index.get(parent_id) else {
            return false;
        };
        if !visited.insert(parent.id.as_str()) {
            return true;
        }
        current = parent;
    }
    false
}
