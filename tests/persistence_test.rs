//! Tests for round-trip persistence across registry instances

use docketter::config::{ConfigStore, StoreError};
use docketter::registry::Registry;
use tempfile::TempDir;

fn store() -> (TempDir, ConfigStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::at(dir.path().join("configurations.json"));
    (dir, store)
}

#[test]
fn test_fresh_registry_sees_previous_mutations() {
    let (_dir, store) = store();

    let mut registry = Registry::with_store(store.clone()).unwrap();
    registry.add_docker("web", "/srv/web.yml", Some("w")).unwrap();
    registry.add_docker("db", "/srv/db.yml", None).unwrap();
    registry.add_alias("db", "d").unwrap();
    registry.remove_alias("w").unwrap();
    drop(registry);

    let reloaded = Registry::with_store(store).unwrap();
    let configurations = reloaded.configurations();

    assert_eq!(
        configurations.dockers.get("web").map(String::as_str),
        Some("/srv/web.yml")
    );
    assert_eq!(
        configurations.dockers.get("db").map(String::as_str),
        Some("/srv/db.yml")
    );
    assert_eq!(
        configurations.alias.get("d").map(String::as_str),
        Some("db")
    );
    assert!(!configurations.alias.contains_key("w"));
}

#[test]
fn test_remove_docker_persists() {
    let (_dir, store) = store();

    let mut registry = Registry::with_store(store.clone()).unwrap();
    registry.add_docker("web", "/srv/web.yml", None).unwrap();
    registry.remove_docker("web").unwrap();
    drop(registry);

    let reloaded = Registry::with_store(store).unwrap();
    assert!(reloaded.configurations().dockers.is_empty());
}

#[test]
fn test_self_heal_persists() {
    let (_dir, store) = store();

    let mut registry = Registry::with_store(store.clone()).unwrap();
    registry.add_docker("web", "/srv/web.yml", Some("w")).unwrap();
    registry.remove_docker("web").unwrap();

    // Resolution of the now-dangling alias removes it from storage too.
    assert!(registry.resolve_reference("w").unwrap().is_none());
    drop(registry);

    let reloaded = Registry::with_store(store).unwrap();
    assert!(!reloaded.configurations().alias.contains_key("w"));
}

#[test]
fn test_corrupt_file_propagates() {
    let (dir, store) = store();
    std::fs::write(dir.path().join("configurations.json"), "{{oops").unwrap();

    let err = Registry::with_store(store).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn test_hand_edited_file_missing_collections_is_healed() {
    let (dir, store) = store();
    std::fs::write(
        dir.path().join("configurations.json"),
        r#"{"dockers": {"web": "/srv/web.yml"}}"#,
    )
    .unwrap();

    let mut registry = Registry::with_store(store).unwrap();

    assert!(registry.configurations().alias.is_empty());
    assert_eq!(
        registry.resolve_reference("web").unwrap().as_deref(),
        Some("/srv/web.yml")
    );
}
