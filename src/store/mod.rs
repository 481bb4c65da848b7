//! In-memory record store.
//!
//! # Data Flow
//! ```text
//! fetched document (JSON)
//!     → types.rs (Document: crates[], modules[])
//!     → records.rs (RecordStore: keyed by (resource type, id))
//!     → read-only lookups for the rest of the session
//! ```
//!
//! # Design Decisions
//! - Store is an explicitly passed object, not a process-wide singleton
//! - Populated once by the loader, never mutated afterwards (no delete API)
//! - Missing keys return None; absence is an expected outcome

pub mod records;
pub mod types;

pub use records::RecordStore;
pub use types::{Document, Record, ResourceType};
