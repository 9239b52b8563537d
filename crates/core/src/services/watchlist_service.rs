use crate::models::notification::Severity;
use crate::models::watchlist::Watchlist;
use crate::storage::kv::KeyValueStore;
use crate::storage::manager::StorageManager;

const TITLE: &str = "Watchlist";

/// Result of a watchlist mutation, before it becomes a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistChange {
    Added {
        symbol: String,
        evicted: Option<String>,
    },
    AlreadyPresent(String),
    /// Removal intent, even if nothing matched (`removed == 0`)
    Removed { symbol: String, removed: usize },
    /// Empty symbol: nothing happens, nothing is announced
    Ignored,
}

impl WatchlistChange {
    /// The toast this change produces, if any.
    #[must_use]
    pub fn notification(&self) -> Option<(&'static str, String, Severity)> {
        match self {
            WatchlistChange::Added { symbol, .. } => Some((
                TITLE,
                format!("{symbol} added to watchlist."),
                Severity::Success,
            )),
            WatchlistChange::AlreadyPresent(symbol) => Some((
                TITLE,
                format!("{symbol} is already in your watchlist."),
                Severity::Info,
            )),
            WatchlistChange::Removed { symbol, .. } => Some((
                TITLE,
                format!("{symbol} removed from watchlist."),
                Severity::Info,
            )),
            WatchlistChange::Ignored => None,
        }
    }

    /// Whether the stored list changed.
    #[must_use]
    pub fn mutated(&self) -> bool {
        match self {
            WatchlistChange::Added { .. } => true,
            WatchlistChange::Removed { removed, .. } => *removed > 0,
            WatchlistChange::AlreadyPresent(_) | WatchlistChange::Ignored => false,
        }
    }
}

/// Watchlist mutations with write-through, best-effort persistence.
pub struct WatchlistService {
    storage_key: String,
}

impl WatchlistService {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Load from the store, falling back to the demo list.
    pub fn load(&self, store: &dyn KeyValueStore, capacity: usize) -> Watchlist {
        StorageManager::load_watchlist(store, &self.storage_key, capacity)
    }

    /// Insert at the front unless already present. Persists on change.
    pub fn add(
        &self,
        watchlist: &mut Watchlist,
        store: &mut dyn KeyValueStore,
        symbol: &str,
    ) -> WatchlistChange {
        if symbol.is_empty() {
            return WatchlistChange::Ignored;
        }
        if watchlist.contains(symbol) {
            return WatchlistChange::AlreadyPresent(symbol.to_string());
        }

        let evicted = watchlist.push_front(symbol.to_string());
        if let Some(old) = &evicted {
            log::debug!("Watchlist full, evicted {old}");
        }
        self.persist(watchlist, store);
        WatchlistChange::Added {
            symbol: symbol.to_string(),
            evicted,
        }
    }

    /// Remove every exact match. Persists and reports removal intent even
    /// when the symbol was absent.
    pub fn remove(
        &self,
        watchlist: &mut Watchlist,
        store: &mut dyn KeyValueStore,
        symbol: &str,
    ) -> WatchlistChange {
        let removed = watchlist.remove_all(symbol);
        self.persist(watchlist, store);
        WatchlistChange::Removed {
            symbol: symbol.to_string(),
            removed,
        }
    }

    /// Normalize form input: trimmed and uppercased; blank input is `None`.
    #[must_use]
    pub fn normalize_input(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_uppercase())
        }
    }

    fn persist(&self, watchlist: &Watchlist, store: &mut dyn KeyValueStore) {
        if let Err(e) = StorageManager::save_watchlist(store, &self.storage_key, watchlist) {
            log::warn!("Failed to persist watchlist: {e}");
        }
    }
}
