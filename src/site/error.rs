use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("Docs plugin instance not found: {0}")]
    PluginNotFound(String),

    #[error("Version {name:?} is not configured for docs plugin {plugin_id:?}")]
    VersionNotFound { plugin_id: String, name: String },
}
