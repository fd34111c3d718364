use std::collections::HashMap;

use stories_core::{initial_search_term, StoragePort, DEFAULT_SEARCH_TERM, SEARCH_KEY};

#[derive(Default)]
struct MapStorage {
    entries: HashMap<String, String>,
}

impl MapStorage {
    fn with(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl StoragePort for MapStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[test]
fn stored_value_wins_over_default() {
    let storage = MapStorage::with(SEARCH_KEY, "Redux");

    let term = initial_search_term(&storage, SEARCH_KEY, DEFAULT_SEARCH_TERM);

    assert_eq!(term, "Redux");
}

#[test]
fn missing_entry_falls_back_to_default() {
    let storage = MapStorage::default();

    let term = initial_search_term(&storage, SEARCH_KEY, DEFAULT_SEARCH_TERM);

    assert_eq!(term, "React");
}

#[test]
fn empty_entry_falls_back_to_default() {
    // An empty stored string reads the same as no entry at all.
    let storage = MapStorage::with(SEARCH_KEY, "");

    let term = initial_search_term(&storage, SEARCH_KEY, DEFAULT_SEARCH_TERM);

    assert_eq!(term, "React");
}

#[test]
fn other_keys_do_not_leak_into_the_search_term() {
    let storage = MapStorage::with("theme", "dark");

    let term = initial_search_term(&storage, SEARCH_KEY, DEFAULT_SEARCH_TERM);

    assert_eq!(term, DEFAULT_SEARCH_TERM);
}

#[test]
fn port_round_trips_through_set_and_get() {
    let mut storage = MapStorage::default();

    storage.set(SEARCH_KEY, "Rust");

    assert_eq!(storage.get(SEARCH_KEY).as_deref(), Some("Rust"));
    assert_eq!(
        initial_search_term(&storage, SEARCH_KEY, DEFAULT_SEARCH_TERM),
        "Rust"
    );
}
