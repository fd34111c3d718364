/// Storage key the search term is persisted under.
pub const SEARCH_KEY: &str = "search";

/// Search term used when storage has nothing usable.
pub const DEFAULT_SEARCH_TERM: &str = "React";

/// Key-value capability the search term is persisted through. Writes are
/// fire-and-forget: implementations log failures and never surface them.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Reads the persisted search term, falling back to `default`.
///
/// An empty stored value is indistinguishable from an absent one; both yield
/// the default.
pub fn initial_search_term(storage: &dyn StoragePort, key: &str, default: &str) -> String {
    match storage.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
