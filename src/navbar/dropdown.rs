//! Version switcher dropdown for the navbar
//!
//! Computes the collapsed label, the link target, and the dropdown entry
//! list for a docs plugin instance, then hands the result to a generic
//! navbar-item renderer. Composition is pure: the dropdown is recomputed
//! from the injected providers on every render and keeps no state of its
//! own.

use tracing::{debug, warn};

use crate::navbar::item::{DropdownEntry, NavbarItem, NavbarItemProps};
use crate::prefs::error::StoreError;
use crate::prefs::store::PreferredVersionStore;
use crate::site::context::VersionProvider;
use crate::site::error::ContextError;
use crate::site::types::{ActiveDocContext, Version};

/// Label shown for the collapsed dropdown in the mobile menu
pub const MOBILE_DROPDOWN_LABEL: &str = "Versions";

/// Version switcher navbar item for one docs plugin instance
pub struct DocsVersionDropdown {
    mobile: bool,
    docs_plugin_id: String,
    props: NavbarItemProps,
}

impl DocsVersionDropdown {
    pub fn new(mobile: bool, docs_plugin_id: impl Into<String>) -> Self {
        Self {
            mobile,
            docs_plugin_id: docs_plugin_id.into(),
            props: NavbarItemProps::new(),
        }
    }

    /// Attach extra display options forwarded unchanged to the renderer
    pub fn with_props(mut self, props: NavbarItemProps) -> Self {
        self.props = props;
        self
    }

    /// Compose the navbar item for the current page.
    ///
    /// The collapsed state shows the active version when the page belongs to
    /// one, else the visitor's preferred version, else the latest version.
    /// With fewer than two versions no entry list is produced and the item
    /// renders as a plain link.
    pub fn compose<P, S>(&self, provider: &P, store: &S) -> Result<NavbarItem, ContextError>
    where
        P: VersionProvider + ?Sized,
        S: PreferredVersionStore + ?Sized,
    {
        let active_doc_context = provider.active_doc_context(&self.docs_plugin_id)?;
        let versions = provider.versions(&self.docs_plugin_id)?;
        let latest_version = provider.latest_version(&self.docs_plugin_id)?;

        // A failed preference read renders as if nothing were stored.
        let preferred_name = store.version_name(&self.docs_plugin_id).unwrap_or_else(|e| {
            warn!(
                plugin_id = %self.docs_plugin_id,
                "failed to read preferred version: {e}"
            );
            None
        });
        let preferred_version = preferred_name
            .and_then(|name| versions.iter().find(|version| version.name == name).cloned());

        let items = Self::entries(&versions, &active_doc_context);

        let dropdown_version = active_doc_context
            .active_version
            .or(preferred_version)
            .or(latest_version);

        // Mobile is handled a bit differently: the trigger only opens the
        // entry list and is not itself navigable.
        let (label, to) = if self.mobile {
            (Some(MOBILE_DROPDOWN_LABEL.to_string()), None)
        } else {
            (
                dropdown_version.as_ref().map(|version| version.label.clone()),
                dropdown_version
                    .as_ref()
                    .and_then(|version| version.main_doc())
                    .map(|doc| doc.path.clone()),
            )
        };

        Ok(NavbarItem {
            mobile: self.mobile,
            label,
            to,
            items,
            props: self.props.clone(),
        })
    }

    /// Record the visitor's selection as the new preferred version.
    ///
    /// Invoked by the host when a dropdown entry is clicked. The write is a
    /// complete overwrite keyed by plugin id, so repeated clicks are
    /// harmless.
    pub fn select<S>(&self, store: &S, version_name: &str) -> Result<(), StoreError>
    where
        S: PreferredVersionStore + ?Sized,
    {
        debug!(
            plugin_id = %self.docs_plugin_id,
            version_name, "version selected"
        );
        store.set_version_name(&self.docs_plugin_id, version_name)
    }

    fn entries(versions: &[Version], context: &ActiveDocContext) -> Option<Vec<DropdownEntry>> {
        // A dropdown with zero or one entry is useless; the caller renders a
        // plain link instead.
        if versions.len() <= 1 {
            return None;
        }

        let entries = versions
            .iter()
            .map(|version| {
                // Link to the same doc in the other version when it exists,
                // otherwise fall back to that version's main doc.
                let target = context
                    .alternate_doc_versions
                    .get(&version.name)
                    .or_else(|| version.main_doc());
                DropdownEntry {
                    label: version.label.clone(),
                    to: target.map(|doc| doc.path.clone()),
                    active: context
                        .active_version
                        .as_ref()
                        .is_some_and(|active| active.name == version.name),
                    version_name: version.name.clone(),
                }
            })
            .collect();

        Some(entries)
    }
}
