//! Documentation site layer
//! - types.rs: Common types (Document, Version, ActiveDocContext)
//! - context.rs: VersionProvider trait and the config-backed SiteContext
//! - error.rs: Error types for context lookups

pub mod context;
pub mod error;
pub mod types;

pub use context::{DocsPluginInstance, SiteContext, VersionProvider};
pub use error::ContextError;
pub use types::{ActiveDocContext, Document, Version};
