//! Common types for documentation site data

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single page within a documentation version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier, stable across versions (e.g., "intro")
    pub id: String,
    /// URL path of the rendered page (e.g., "/docs/2.0/intro")
    pub path: String,
}

/// A labeled snapshot of documentation content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Unique identifier of the version (e.g., "2.0", "next")
    pub name: String,
    /// Display string shown in the navbar
    pub label: String,
    /// Identifier of the designated landing document
    pub main_doc_id: String,
    /// Documents belonging to this version, in sidebar order
    pub docs: Vec<Document>,
}

impl Version {
    /// The designated landing document of this version
    ///
    /// Returns `None` when `main_doc_id` does not resolve to any document,
    /// which indicates a misconfigured plugin instance.
    pub fn main_doc(&self) -> Option<&Document> {
        self.docs.iter().find(|doc| doc.id == self.main_doc_id)
    }
}

/// Runtime information about which version/document the current page belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveDocContext {
    /// The version the current page belongs to, if any
    pub active_version: Option<Version>,
    /// For the page currently viewed, the corresponding document in other
    /// versions, keyed by version name. May be empty or partial.
    pub alternate_doc_versions: IndexMap<String, Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn version(main_doc_id: &str, doc_ids: &[&str]) -> Version {
        Version {
            name: "1.0".to_string(),
            label: "1.0".to_string(),
            main_doc_id: main_doc_id.to_string(),
            docs: doc_ids
                .iter()
                .map(|id| Document {
                    id: id.to_string(),
                    path: format!("/docs/1.0/{id}"),
                })
                .collect(),
        }
    }

    #[rstest]
    #[case("intro", &["intro", "install"], Some("/docs/1.0/intro"))]
    #[case("install", &["intro", "install"], Some("/docs/1.0/install"))]
    #[case("missing", &["intro", "install"], None)]
    #[case("intro", &[], None)]
    fn main_doc_resolves_by_id(
        #[case] main_doc_id: &str,
        #[case] doc_ids: &[&str],
        #[case] expected_path: Option<&str>,
    ) {
        let version = version(main_doc_id, doc_ids);
        assert_eq!(
            version.main_doc().map(|doc| doc.path.as_str()),
            expected_path
        );
    }

    #[test]
    fn version_deserializes_from_camel_case_json() {
        let version: Version = serde_json::from_value(serde_json::json!({
            "name": "2.0",
            "label": "2.0",
            "mainDocId": "intro",
            "docs": [{"id": "intro", "path": "/docs/2.0/intro"}]
        }))
        .unwrap();

        assert_eq!(version.main_doc_id, "intro");
        assert_eq!(version.docs.len(), 1);
    }

    #[test]
    fn active_doc_context_defaults_to_empty() {
        let context = ActiveDocContext::default();
        assert!(context.active_version.is_none());
        assert!(context.alternate_doc_versions.is_empty());
    }
}
