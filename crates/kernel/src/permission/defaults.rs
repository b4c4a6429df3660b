//! Built-in permission set.
//!
//! Applied whenever the authorization collaborator yields nothing, so a
//! fresh deployment still gets a navigable admin.

use super::{PermissionEntry, PermissionKind};

fn menu(id: &str, label: &str, icon: &str, route: &str, component: &str) -> PermissionEntry {
    PermissionEntry {
        id: id.to_string(),
        parent_id: None,
        kind: PermissionKind::Menu,
        route: route.to_string(),
        component: Some(component.to_string()),
        label: label.to_string(),
        icon: Some(icon.to_string()),
        order: Some(1),
        hidden: false,
        hide_tab: None,
        disabled: false,
        frame_src: None,
        new_feature: false,
        children: Vec::new(),
    }
}

/// Default navigation for the educational platform admin.
pub fn default_permissions() -> Vec<PermissionEntry> {
    vec![
        menu(
            "programs",
            "app.programs.title",
            "ic-management",
            "programs",
            "content/programs/index",
        ),
        menu(
            "levels",
            "app.levels.title",
            "solar:layers-minimalistic-broken",
            "levels",
            "content/levels/index",
        ),
        menu(
            "subjects",
            "app.subjects.title",
            "solar:book-2-broken",
            "subjects",
            "content/subjects/index",
        ),
        menu(
            "lessons",
            "app.lessons.title",
            "solar:video-frame-play-horizontal-broken",
            "lessons",
            "content/lessons/index",
        ),
        menu(
            "tasks",
            "app.tasks.title",
            "solar:bill-list-broken",
            "tasks",
            "content/tasks/index",
        ),
        menu(
            "subscriptions",
            "app.subscriptions.title",
            "solar:people-nearby-broken",
            "subscriptions",
            "content/subscriptions/index",
        ),
    ]
}
