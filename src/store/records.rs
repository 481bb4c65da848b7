//! The keyed record store.

use dashmap::DashMap;
use std::sync::Arc;

use crate::store::types::{Document, Record, ResourceType};

/// A thread-safe store of ingested records, keyed by `(resource type, id)`.
///
/// Cloning is cheap: clones share the same underlying map, so a store handed
/// to the loader and a store handed to the resolver observe the same data.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<DashMap<(ResourceType, String), Record>>,
}

impl RecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Insert a batch of records under one resource type.
    pub fn push_batch(&self, ty: ResourceType, records: Vec<Record>) {
        let count = records.len();
        for record in records {
            self.inner.insert((ty, record.id.clone()), record);
        }
        tracing::debug!(resource_type = %ty, count, "Ingested record batch");
    }

    /// Insert every collection of a parsed document.
    pub fn push_document(&self, document: Document) {
        self.push_batch(ResourceType::Crate, document.crates);
        self.push_batch(ResourceType::Module, document.modules);
        tracing::info!(total = self.len(), "Document ingested into record store");
    }

    /// Look up one record. Absence is a normal outcome, not an error.
    pub fn get(&self, ty: ResourceType, id: &str) -> Option<Record> {
        self.inner
            .get(&(ty, id.to_string()))
            .map(|r| r.value().clone())
    }

    /// Number of records across all resource types.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
