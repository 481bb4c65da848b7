//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the document location resolves to an absolute URL
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: BrowserConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use url::Url;

use crate::config::schema::BrowserConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "document.base_url").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn err(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &BrowserConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.document.base_url) {
        Ok(base) => {
            if base.cannot_be_a_base() {
                errors.push(err(
                    "document.base_url",
                    "must be an absolute URL that can serve as a base",
                ));
            } else if let Err(e) = base.join(&config.document.path) {
                errors.push(err("document.path", format!("does not join onto base_url: {e}")));
            }
        }
        Err(e) => errors.push(err("document.base_url", format!("not a valid URL: {e}"))),
    }

    if config.document.path.is_empty() {
        errors.push(err("document.path", "must not be empty"));
    }

    if config.fetch.connect_secs == 0 {
        errors.push(err("fetch.connect_secs", "must be greater than zero"));
    }
    if config.fetch.request_secs == 0 {
        errors.push(err("fetch.request_secs", "must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
