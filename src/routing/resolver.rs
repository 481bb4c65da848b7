//! Route-parameter to record resolution.
//!
//! # Responsibilities
//! - Turn a root resource name into a crate lookup
//! - Compose crate name + decoded rest path into a module lookup
//!
//! # Design Decisions
//! - Immutable after construction; shares the store by cheap clone
//! - The rest path is always run through `path::decode`, so slash-form
//!   (straight from the URL) and separator-form (already decoded) inputs
//!   normalize to the same identifier
//! - Missing records resolve to None; resolution never fails

use crate::routing::path;
use crate::routing::route::Route;
use crate::store::{Record, RecordStore, ResourceType};

/// Resolves parsed routes against the record store.
pub struct Resolver {
    store: RecordStore,
}

impl Resolver {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Look up the root resource of a crate.
    pub fn resolve_crate(&self, name: &str) -> Option<Record> {
        let record = self.store.get(ResourceType::Crate, name);
        tracing::debug!(name, found = record.is_some(), "Resolved crate route");
        record
    }

    /// Look up a module nested inside a crate.
    ///
    /// `rest_path` may arrive in slash form (`"sync/watch"`) or already in
    /// separator form (`"sync::watch"`); both compose to the same identifier.
    pub fn resolve_module(&self, crate_name: &str, rest_path: &str) -> Option<Record> {
        let id = format!("{crate_name}{}{}", path::SEPARATOR, path::decode(rest_path));
        let record = self.store.get(ResourceType::Module, &id);
        tracing::debug!(id, found = record.is_some(), "Resolved module route");
        record
    }

    /// Dispatch over the two route shapes.
    pub fn resolve(&self, route: &Route) -> Option<Record> {
        match route {
            Route::Crate { name } => self.resolve_crate(name),
            Route::Module { crate_name, path } => self.resolve_module(crate_name, path),
        }
    }
}
