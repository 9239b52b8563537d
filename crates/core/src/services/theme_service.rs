use crate::models::theme::ThemePreference;
use crate::storage::kv::KeyValueStore;
use crate::storage::manager::StorageManager;

/// Light/dark preference with write-through persistence.
pub struct ThemeService {
    storage_key: String,
}

impl ThemeService {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    pub fn load(&self, store: &dyn KeyValueStore) -> ThemePreference {
        StorageManager::load_theme(store, &self.storage_key)
    }

    /// Flip and persist. A failed write is logged; the in-memory theme still flips.
    pub fn toggle(&self, theme: &mut ThemePreference, store: &mut dyn KeyValueStore) -> ThemePreference {
        *theme = theme.toggled();
        if let Err(e) = StorageManager::save_theme(store, &self.storage_key, *theme) {
            log::warn!("Failed to persist theme preference: {e}");
        }
        *theme
    }
}
