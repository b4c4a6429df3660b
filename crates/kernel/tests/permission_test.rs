#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Permission ingestion tests.
//!
//! The ingestion boundary: JSON documents in the authorization API shape,
//! file-backed sources, and the default-set fallback wired through
//! application state.

use std::path::PathBuf;

use academy_kernel::config::Config;
use academy_kernel::permission::{
    FilePermissionSource, StaticPermissionSource, load_permissions, parse_permissions,
};
use academy_kernel::state::AppState;
use academy_test_utils::{catalogue_entry, menu_entry, permission_document};

fn temp_document(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("academy-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn api_shaped_document_parses() {
    let doc = permission_document(&[
        catalogue_entry("content", "content")
            .with_child(menu_entry("tasks", "tasks", "content/tasks/index").with_order(2)),
        menu_entry("programs", "programs", "content/programs/index").with_label("Programs"),
    ]);

    let entries = parse_permissions(&doc).unwrap();
    assert_eq!(entries.len(), 2);

    // Empty-string parents normalize to root.
    assert!(entries[0].is_root());
    assert_eq!(entries[0].children[0].parent_id.as_deref(), Some("content"));
    assert_eq!(entries[0].children[0].order, Some(2));
    assert_eq!(entries[1].label, "Programs");
}

#[tokio::test]
async fn file_source_round_trips() {
    let doc = permission_document(&[menu_entry("levels", "levels", "content/levels/index")]);
    let path = temp_document("file-source", &doc);

    let source = FilePermissionSource::new(path.clone());
    let entries = load_permissions(&source).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "levels");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn malformed_document_is_a_parse_error() {
    let path = temp_document("malformed", "{ not json ]");

    let source = FilePermissionSource::new(path.clone());
    assert!(load_permissions(&source).await.is_err());

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn state_without_a_file_serves_the_default_set() {
    let state = AppState::new(&Config::default());

    let permissions = load_permissions(state.permission_source()).await.unwrap();
    assert_eq!(permissions.len(), 6);

    let routes = state.nav().routes_for(&permissions);
    assert_eq!(routes.len(), 6);
}

#[tokio::test]
async fn state_with_a_file_serves_the_document() {
    let doc = permission_document(&[
        menu_entry("tasks", "tasks", "content/tasks/index"),
        menu_entry("subjects", "subjects", "content/subjects/index"),
    ]);
    let path = temp_document("state-file", &doc);

    let config = Config {
        permissions_file: Some(path.clone()),
    };
    let state = AppState::new(&config);

    let permissions = load_permissions(state.permission_source()).await.unwrap();
    let routes = state.nav().routes_for(&permissions);
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].meta.as_ref().unwrap().key, "/tasks");

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn empty_static_source_falls_back_to_defaults() {
    let source = StaticPermissionSource::new(Vec::new());
    let permissions = load_permissions(&source).await.unwrap();
    assert_eq!(permissions.len(), 6);
    assert!(permissions.iter().all(|p| p.is_root()));
}
