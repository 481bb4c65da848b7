//! The two browsable URL shapes.
//!
//! # Responsibilities
//! - Parse `/:rootName` into a crate route
//! - Parse `/:rootName/*restPath` into a module route
//!
//! # Design Decisions
//! - Leading slash optional, trailing slash tolerated
//! - Empty path is an explicit no-match (None), not a default route

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/:rootName` — the root resource of a crate.
    Crate { name: String },

    /// `/:rootName/*restPath` — a module nested inside a crate. `path` keeps
    /// the slash form as received from the URL; the resolver decodes it.
    Module { crate_name: String, path: String },
}

impl Route {
    /// Parse a URL path into one of the two route shapes.
    pub fn parse(url_path: &str) -> Option<Route> {
        let trimmed = url_path.trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.split_once('/') {
            None => Some(Route::Crate {
                name: trimmed.to_string(),
            }),
            Some((name, rest)) => Some(Route::Module {
                crate_name: name.to_string(),
                path: rest.to_string(),
            }),
        }
    }
}
