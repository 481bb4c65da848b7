//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the documentation browser core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BrowserConfig {
    /// Where the static document lives.
    pub document: DocumentConfig,

    /// Fetch timeout settings.
    pub fetch: FetchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Location of the static documentation document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Base URL of the deployment (e.g., "http://localhost:8080").
    pub base_url: String,

    /// Document path joined onto the base URL. "/data.json" resolves against
    /// the deployment root; "data.json" resolves relative to the base URL.
    pub path: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            path: "/data.json".to_string(),
        }
    }
}

/// Timeouts for the document fetch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
