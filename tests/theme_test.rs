//! Tests for the persisted theme preference.

use noughts::store::{KeyValueStore, MemoryStore, StoreError};
use noughts::{THEME_KEY, Theme, ThemePreference};
use std::sync::Arc;

/// Store whose writes always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::new("Write rejected"))
    }
}

#[test]
fn test_defaults_to_light() {
    let preference = ThemePreference::load(Arc::new(MemoryStore::new()));
    assert_eq!(preference.current(), Theme::Light);
}

#[test]
fn test_toggle_persists_string_value() {
    let store = Arc::new(MemoryStore::new());
    let mut preference = ThemePreference::load(store.clone());

    assert_eq!(preference.toggle(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    assert_eq!(preference.toggle(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_loads_persisted_choice() {
    let store = Arc::new(MemoryStore::new());
    store.set(THEME_KEY, "dark").unwrap();

    let preference = ThemePreference::load(store);
    assert_eq!(preference.current(), Theme::Dark);
}

#[test]
fn test_unrecognized_value_defaults_to_light() {
    let store = Arc::new(MemoryStore::new());
    store.set(THEME_KEY, "solarized").unwrap();

    let preference = ThemePreference::load(store);
    assert_eq!(preference.current(), Theme::Light);
}

#[test]
fn test_write_failure_keeps_memory_authoritative() {
    let mut preference = ThemePreference::load(Arc::new(ReadOnlyStore::default()));

    assert_eq!(preference.toggle(), Theme::Dark);
    assert_eq!(preference.current(), Theme::Dark);
}
