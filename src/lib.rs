//! Client core for a rustdoc documentation browser.
//!
//! # Architecture Overview
//!
//! ```text
//! application start
//!     → loader (one HTTP GET of the static document, once per session)
//!     → store (ingest records: crates, modules)
//!
//! navigation
//!     → routing::route (parse /:rootName or /:rootName/*restPath)
//!     → routing::path (URL path ↔ :: identifier)
//!     → routing::resolver (synchronous store lookup)
//!     → Record or None (not-found is a normal state, not an error)
//! ```
//!
//! The loader is the only suspending component; resolution is a pure read of
//! already-resident memory. The embedding application sequences the loader
//! ahead of any resolution (route-tree gating); an unpopulated store simply
//! resolves everything to `None`, so out-of-order use degrades to not-found
//! rather than failing.

// Core subsystems
pub mod loader;
pub mod routing;
pub mod store;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod observability;
pub mod session;

pub use config::BrowserConfig;
pub use error::{LoadError, LoadResult};
pub use loader::Loader;
pub use routing::resolver::Resolver;
pub use routing::route::Route;
pub use session::Session;
pub use store::{Record, RecordStore, ResourceType};
