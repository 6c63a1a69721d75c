//! `localStorage` as a `PreferenceStore`.

use crate::theme::{PreferenceStore, ThemeError};

/// Durable store backed by `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Bind to the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::StorageUnavailable` outside a window context or
    /// when the browser denies storage access.
    pub fn open() -> Result<Self, ThemeError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(format!("read {key}: {e:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(format!("write {key}: {e:?}")))
    }
}
