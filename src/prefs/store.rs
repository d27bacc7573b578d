//! Preferred-version store trait

#[cfg(test)]
use mockall::automock;

use crate::prefs::error::StoreError;

/// Trait for persisting the visitor's preferred version per docs plugin instance
///
/// The storage medium, scope, and expiry are entirely the implementation's
/// concern; callers only rely on the get/set/clear contract. Writes are
/// complete overwrites keyed by plugin id, so repeated or concurrent writes
/// resolve to last-write-wins.
#[cfg_attr(test, automock)]
pub trait PreferredVersionStore: Send + Sync {
    /// The stored preferred version name, if one was saved
    fn version_name(&self, plugin_id: &str) -> Result<Option<String>, StoreError>;

    /// Persist a new preferred version name, overwriting any previous value
    fn set_version_name(&self, plugin_id: &str, version_name: &str) -> Result<(), StoreError>;

    /// Forget the stored preference for a plugin instance
    fn clear(&self, plugin_id: &str) -> Result<(), StoreError>;
}
