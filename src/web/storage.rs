use web_sys::{Storage, Window};

use crate::core::{PreferenceStore, StoreError};

/// Preferences in `window.localStorage`.
///
/// Private browsing modes may deny storage access; reads then return nothing
/// and writes fail with [`StoreError::Unavailable`].
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Bind to the window's storage, if accessible.
    pub fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
