//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! URL path ("/serde/de")
//!     → route.rs (parse into Crate or Module shape)
//!     → path.rs (decode rest path: "/" → "::")
//!     → resolver.rs (compose identifier, look up store)
//!     → Record or None
//! ```
//!
//! # Design Decisions
//! - The codec is a plain substring substitution; no escaping layer exists,
//!   so segments containing "::" or "/" are not round-trip safe (known,
//!   documented limitation)
//! - Resolution is synchronous and pure: no suspension, no mutation
//! - Explicit None rather than an error for missing records

pub mod path;
pub mod resolver;
pub mod route;
