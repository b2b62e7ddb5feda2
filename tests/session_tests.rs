use ludoview::cli::commands::items::apply_overrides;
use ludoview::config::session::{FileStore, FilterSession, FilterStore, MemoryStore};
use ludoview::core::items::ItemListFilters;
use ludoview::errors::AppError;
use ludoview::models::AgeBracket;
use std::env;
use std::fs;
use std::path::PathBuf;

fn session_path(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("ludoview_{}_session.yaml", name));
    fs::remove_file(&path).ok();
    path
}

fn sample_session() -> FilterSession {
    let mut session = FilterSession::default();
    session.items.text = "jungle".to_string();
    session.items.exclude_age(AgeBracket::Two);
    session.items.exclude_big = true;
    session.users.show_disabled = true;
    session
}

#[test]
fn test_file_store_missing_file_is_none() {
    let store = FileStore::new(session_path("missing"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_file_store_empty_file_is_none() {
    let path = session_path("empty");
    fs::write(&path, "\n").unwrap();
    let store = FileStore::new(path);
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_file_store_save_load_clear() {
    let path = session_path("roundtrip");
    let mut store = FileStore::new(path.clone());
    let session = sample_session();

    store.save(&session).unwrap();
    assert!(path.exists());
    assert_eq!(store.load().unwrap(), Some(session));

    store.clear().unwrap();
    assert!(!path.exists());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_file_store_partial_session_takes_defaults() {
    let path = session_path("partial");
    fs::write(&path, "items:\n  text: dix\n").unwrap();
    let store = FileStore::new(path);

    let session = store.load().unwrap().expect("session stored");
    assert_eq!(session.items.text, "dix");
    // Fields left out keep their defaults.
    assert!(session.items.exclude_disabled);
    assert!(!session.users.show_disabled);
}

#[test]
fn test_file_store_rejects_garbage() {
    let path = session_path("garbage");
    fs::write(&path, "items: [1, 2").unwrap();
    let store = FileStore::new(path);
    assert!(matches!(store.load(), Err(AppError::Yaml(_))));
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::default();
    assert!(store.load().unwrap().is_none());

    store.save(&sample_session()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample_session()));

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_overrides_layer_on_stored_filters() {
    let stored = sample_session().items;
    let filters = apply_overrides(stored, None, &[6], false, true, false, true).unwrap();

    assert_eq!(filters.text, "jungle");
    assert!(filters.exclude_big);
    assert!(filters.exclude_outside);
    assert!(!filters.exclude_disabled);
    let ages: Vec<AgeBracket> = filters.excluded_ages().collect();
    assert_eq!(ages, vec![AgeBracket::Two, AgeBracket::Six]);
}

#[test]
fn test_overrides_replace_text() {
    let filters = apply_overrides(
        ItemListFilters::default(),
        Some("Dixit"),
        &[],
        false,
        false,
        true,
        false,
    )
    .unwrap();
    assert_eq!(filters.text, "Dixit");
    assert!(filters.only_big_or_outside);
    assert!(filters.exclude_disabled);
}

#[test]
fn test_overrides_reject_unknown_age() {
    let result = apply_overrides(
        ItemListFilters::default(),
        None,
        &[3],
        false,
        false,
        false,
        false,
    );
    assert!(matches!(result, Err(AppError::InvalidAge(3))));
}
