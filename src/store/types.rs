//! Record and document types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two browsable resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Crate,
    Module,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Crate => "crate",
            ResourceType::Module => "module",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingested record.
///
/// `id` is the hierarchical identifier unique within its resource type
/// (e.g. `"serde"` for a crate, `"serde::de"` for a module). Everything else
/// in the record object (docs, name, relationships, ...) is carried opaquely
/// in `attributes` for the view layer to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,

    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Construct a record with no attributes. Mostly useful in tests.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: serde_json::Map::new(),
        }
    }
}

/// Batch-ingestion shape of the fetched document.
///
/// A document may omit either collection; both default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub crates: Vec<Record>,
    pub modules: Vec<Record>,
}

impl Document {
    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.crates.len() + self.modules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserializes_spec_shape() {
        let doc: Document = serde_json::from_str(
            r#"{"crates":[{"id":"serde"}],"modules":[{"id":"serde::de"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.crates.len(), 1);
        assert_eq!(doc.crates[0].id, "serde");
        assert_eq!(doc.modules[0].id, "serde::de");
        assert_eq!(doc.record_count(), 2);
    }

    #[test]
    fn test_document_collections_are_optional() {
        let doc: Document = serde_json::from_str(r#"{"crates":[{"id":"log"}]}"#).unwrap();
        assert_eq!(doc.crates.len(), 1);
        assert!(doc.modules.is_empty());
    }

    #[test]
    fn test_record_keeps_extra_attributes() {
        let record: Record = serde_json::from_str(
            r#"{"id":"serde::de","name":"de","docs":"Deserialization framework"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "serde::de");
        assert_eq!(record.attributes["name"], "de");
        assert_eq!(record.attributes["docs"], "Deserialization framework");
    }
}
