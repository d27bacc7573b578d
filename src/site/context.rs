//! Docs context provider
//!
//! The navbar layer never looks up site state through globals; it is handed a
//! [`VersionProvider`] explicitly. [`SiteContext`] is the config-backed
//! implementation used by the generator host: one [`DocsPluginInstance`] per
//! docs plugin id, so multi-instance sites (product docs + API docs) keep
//! their version lists separate.

#[cfg(test)]
use mockall::automock;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::SiteConfig;
use crate::site::error::ContextError;
use crate::site::types::{ActiveDocContext, Version};

/// Trait supplying the documentation context for a docs plugin instance
#[cfg_attr(test, automock)]
pub trait VersionProvider {
    /// All versions of the plugin instance, in source order
    fn versions(&self, plugin_id: &str) -> Result<Vec<Version>, ContextError>;

    /// The designated latest version, if the instance has any versions
    fn latest_version(&self, plugin_id: &str) -> Result<Option<Version>, ContextError>;

    /// What the visitor is currently viewing within this plugin instance
    fn active_doc_context(&self, plugin_id: &str) -> Result<ActiveDocContext, ContextError>;
}

/// Versions and the current viewing state of one docs plugin instance
#[derive(Debug, Clone, Default)]
pub struct DocsPluginInstance {
    pub versions: Vec<Version>,
    pub latest_version: Option<Version>,
    pub active_doc_context: ActiveDocContext,
}

/// Config-backed [`VersionProvider`] holding every docs plugin instance of a site
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    plugins: IndexMap<String, DocsPluginInstance>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the context from a loaded site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Self, ContextError> {
        let mut context = Self::new();
        for (plugin_id, plugin) in &config.docs {
            context.insert_plugin(
                plugin_id,
                plugin.versions.clone(),
                plugin.latest_version.as_deref(),
            )?;
        }
        Ok(context)
    }

    /// Register a plugin instance with its versions.
    ///
    /// `latest_name` designates the latest version; when absent, the first
    /// configured version is latest. Naming an unconfigured version is a
    /// configuration error.
    pub fn insert_plugin(
        &mut self,
        plugin_id: &str,
        versions: Vec<Version>,
        latest_name: Option<&str>,
    ) -> Result<(), ContextError> {
        let latest_version = match latest_name {
            Some(name) => Some(
                versions
                    .iter()
                    .find(|version| version.name == name)
                    .cloned()
                    .ok_or_else(|| ContextError::VersionNotFound {
                        plugin_id: plugin_id.to_string(),
                        name: name.to_string(),
                    })?,
            ),
            None => versions.first().cloned(),
        };

        debug!(
            plugin_id,
            versions = versions.len(),
            latest = latest_version.as_ref().map(|v| v.name.as_str()),
            "registered docs plugin instance"
        );

        self.plugins.insert(
            plugin_id.to_string(),
            DocsPluginInstance {
                versions,
                latest_version,
                active_doc_context: ActiveDocContext::default(),
            },
        );
        Ok(())
    }

    /// Mark the version containing `doc_id` as active and record, for every
    /// version that has a document with the same id, the alternate document
    /// the visitor would land on when switching.
    ///
    /// An unknown `doc_id` resets the instance to "no active document".
    pub fn activate_doc(&mut self, plugin_id: &str, doc_id: &str) -> Result<(), ContextError> {
        let instance = self
            .plugins
            .get_mut(plugin_id)
            .ok_or_else(|| ContextError::PluginNotFound(plugin_id.to_string()))?;

        let active_version = instance
            .versions
            .iter()
            .find(|version| version.docs.iter().any(|doc| doc.id == doc_id))
            .cloned();

        let alternate_doc_versions = active_version
            .is_some()
            .then(|| {
                instance
                    .versions
                    .iter()
                    .filter_map(|version| {
                        version
                            .docs
                            .iter()
                            .find(|doc| doc.id == doc_id)
                            .map(|doc| (version.name.clone(), doc.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        if active_version.is_none() {
            debug!(plugin_id, doc_id, "document not found in any version");
        }

        instance.active_doc_context = ActiveDocContext {
            active_version,
            alternate_doc_versions,
        };
        Ok(())
    }

    fn plugin(&self, plugin_id: &str) -> Result<&DocsPluginInstance, ContextError> {
        self.plugins
            .get(plugin_id)
            .ok_or_else(|| ContextError::PluginNotFound(plugin_id.to_string()))
    }
}

impl VersionProvider for SiteContext {
    fn versions(&self, plugin_id: &str) -> Result<Vec<Version>, ContextError> {
        Ok(self.plugin(plugin_id)?.versions.clone())
    }

    fn latest_version(&self, plugin_id: &str) -> Result<Option<Version>, ContextError> {
        Ok(self.plugin(plugin_id)?.latest_version.clone())
    }

    fn active_doc_context(&self, plugin_id: &str) -> Result<ActiveDocContext, ContextError> {
        Ok(self.plugin(plugin_id)?.active_doc_context.clone())
    }
}
