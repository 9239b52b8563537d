use crate::demo::DEFAULT_WATCHLIST;
use crate::errors::CoreError;
use crate::models::theme::ThemePreference;
use crate::models::watchlist::Watchlist;

use super::kv::KeyValueStore;

/// High-level persistence of the two durable preferences: the watchlist and
/// the theme. Reads never fail the caller; writes report errors so callers
/// can decide to log and carry on.
pub struct StorageManager;

impl StorageManager {
    /// Load the watchlist stored under `key`.
    ///
    /// Flow: store → JSON array of strings → sanitized `Watchlist`.
    /// A missing key, unreadable store, or malformed payload all yield the
    /// demo default list.
    pub fn load_watchlist(store: &dyn KeyValueStore, key: &str, capacity: usize) -> Watchlist {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No persisted watchlist under '{key}', using defaults");
                return Self::default_watchlist(capacity);
            }
            Err(e) => {
                log::warn!("Failed to read watchlist: {e}; using defaults");
                return Self::default_watchlist(capacity);
            }
        };

        match Self::decode_watchlist(&raw, capacity) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Ignoring malformed watchlist data: {e}");
                Self::default_watchlist(capacity)
            }
        }
    }

    /// Persist the watchlist as a JSON array.
    pub fn save_watchlist(
        store: &mut dyn KeyValueStore,
        key: &str,
        watchlist: &Watchlist,
    ) -> Result<(), CoreError> {
        let json = serde_json::to_string(watchlist.symbols())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize watchlist: {e}")))?;
        store.set(key, &json)
    }

    /// Load the theme; absent or unreadable means light.
    pub fn load_theme(store: &dyn KeyValueStore, key: &str) -> ThemePreference {
        match store.get(key) {
            Ok(Some(value)) => ThemePreference::from_stored(&value),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                log::warn!("Failed to read theme preference: {e}");
                ThemePreference::default()
            }
        }
    }

    pub fn save_theme(
        store: &mut dyn KeyValueStore,
        key: &str,
        theme: ThemePreference,
    ) -> Result<(), CoreError> {
        store.set(key, theme.as_str())
    }

    #[must_use]
    pub fn default_watchlist(capacity: usize) -> Watchlist {
        Watchlist::from_symbols(DEFAULT_WATCHLIST, capacity)
    }

    /// Parse a persisted payload. Duplicates and overflow are dropped rather
    /// than rejected, since an older session may have written them.
    pub fn decode_watchlist(raw: &str, capacity: usize) -> Result<Watchlist, CoreError> {
        let symbols: Vec<String> = serde_json::from_str(raw)?;
        Ok(Watchlist::from_symbols(symbols, capacity))
    }
}
