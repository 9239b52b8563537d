// ═══════════════════════════════════════════════════════════════════
// Storage Tests: key-value backends, StorageManager
// ═══════════════════════════════════════════════════════════════════

use trading_assistant_core::demo::DEFAULT_WATCHLIST;
use trading_assistant_core::errors::CoreError;
use trading_assistant_core::models::config::{THEME_KEY, WATCHLIST_KEY};
use trading_assistant_core::models::theme::ThemePreference;
use trading_assistant_core::models::watchlist::Watchlist;
use trading_assistant_core::storage::kv::{FileStore, KeyValueStore, MemoryStore};
use trading_assistant_core::storage::manager::StorageManager;

/// A store whose every operation fails, like a browser with storage disabled.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, CoreError> {
        Err(CoreError::Storage("storage disabled".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("storage disabled".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("storage disabled".into()))
    }
}

// ═══════════════════════════════════════════════════════════════════
// MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn with_entry_prepopulates() {
        let store = MemoryStore::new().with_entry(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileStore
// ═══════════════════════════════════════════════════════════════════

mod file_store {
    use super::*;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(WATCHLIST_KEY).unwrap(), None);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.set(THEME_KEY, "dark").unwrap();
            store.set(WATCHLIST_KEY, r#"["TCS"]"#).unwrap();
            store.remove(WATCHLIST_KEY).unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get(WATCHLIST_KEY).unwrap(), None);
    }

    #[test]
    fn empty_file_starts_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"   \n").unwrap();
        let store = FileStore::open(file.path()).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn malformed_file_is_deserialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[1, 2, 3]").unwrap();
        let result = FileStore::open(file.path());
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn failed_flush_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so every write fails
        let path = dir.path().join("missing").join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        let result = store.set(THEME_KEY, "dark");
        assert!(matches!(result, Err(CoreError::FileIO(_))));
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager
// ═══════════════════════════════════════════════════════════════════

mod manager {
    use super::*;

    #[test]
    fn absent_watchlist_loads_defaults() {
        let store = MemoryStore::new();
        let list = StorageManager::load_watchlist(&store, WATCHLIST_KEY, 20);
        assert_eq!(list.symbols(), DEFAULT_WATCHLIST);
    }

    #[test]
    fn malformed_watchlist_loads_defaults() {
        let store = MemoryStore::new().with_entry(WATCHLIST_KEY, "{not an array");
        let list = StorageManager::load_watchlist(&store, WATCHLIST_KEY, 20);
        assert_eq!(list.symbols(), DEFAULT_WATCHLIST);
    }

    #[test]
    fn unreadable_store_loads_defaults() {
        let list = StorageManager::load_watchlist(&BrokenStore, WATCHLIST_KEY, 20);
        assert_eq!(list.symbols(), DEFAULT_WATCHLIST);
        assert_eq!(
            StorageManager::load_theme(&BrokenStore, THEME_KEY),
            ThemePreference::Light
        );
    }

    #[test]
    fn persisted_watchlist_is_sanitized() {
        let store = MemoryStore::new().with_entry(WATCHLIST_KEY, r#"["A","B","A","C"]"#);
        let list = StorageManager::load_watchlist(&store, WATCHLIST_KEY, 2);
        assert_eq!(list.symbols(), ["A", "B"]);
    }

    #[test]
    fn save_writes_json_array() {
        let mut store = MemoryStore::new();
        let list = Watchlist::from_symbols(["INFY", "TCS"], 20);
        StorageManager::save_watchlist(&mut store, WATCHLIST_KEY, &list).unwrap();
        assert_eq!(
            store.get(WATCHLIST_KEY).unwrap().as_deref(),
            Some(r#"["INFY","TCS"]"#)
        );
    }

    #[test]
    fn save_propagates_store_error() {
        let list = Watchlist::new(20);
        let result = StorageManager::save_watchlist(&mut BrokenStore, WATCHLIST_KEY, &list);
        assert!(matches!(result, Err(CoreError::Storage(_))));
    }

    #[test]
    fn theme_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(StorageManager::load_theme(&store, THEME_KEY), ThemePreference::Light);
        StorageManager::save_theme(&mut store, THEME_KEY, ThemePreference::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(StorageManager::load_theme(&store, THEME_KEY), ThemePreference::Dark);
    }

    #[test]
    fn decode_rejects_non_array() {
        let result = StorageManager::decode_watchlist(r#"{"a":1}"#, 20);
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }
}
