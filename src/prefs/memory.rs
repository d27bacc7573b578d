//! In-memory preferred-version store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::prefs::error::StoreError;
use crate::prefs::store::PreferredVersionStore;

/// Mutex-guarded map store with no persistence across runs
///
/// Used by tests and by hosts that persist preferences through their own
/// mechanism and only need the in-process contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_entries(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl PreferredVersionStore for MemoryStore {
    fn version_name(&self, plugin_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock_entries()?.get(plugin_id).cloned())
    }

    fn set_version_name(&self, plugin_id: &str, version_name: &str) -> Result<(), StoreError> {
        self.lock_entries()?
            .insert(plugin_id.to_string(), version_name.to_string());
        Ok(())
    }

    fn clear(&self, plugin_id: &str) -> Result<(), StoreError> {
        self.lock_entries()?.remove(plugin_id);
        Ok(())
    }
}
