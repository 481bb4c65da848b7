//! One-shot document loader.
//!
//! # Data Flow
//! ```text
//! load(store, session)
//!     → HTTP GET document_url        (raced against session cancellation)
//!     → status check (non-2xx → Status error)
//!     → read body                    (raced against session cancellation)
//!     → parse full Document          (malformed → Parse error, zero writes)
//!     → final cancellation check
//!     → store.push_document
//! ```
//!
//! # Design Decisions
//! - One-shot guard (OnceCell): after a successful load, further calls are
//!   no-ops; a failed load leaves the guard unset so the next navigation can
//!   retry
//! - The document is parsed in full before any store write, so a failed
//!   fetch or parse leaves the store exactly as it was
//! - A cancelled session never observes store mutation, even if the response
//!   arrives after teardown

use reqwest::Client;
use std::time::Duration;
use tokio::sync::OnceCell;
use url::Url;

use crate::config::BrowserConfig;
use crate::error::{LoadError, LoadResult};
use crate::session::Session;
use crate::store::{Document, RecordStore};

/// Fetches the static documentation document and ingests it into the store.
pub struct Loader {
    client: Client,
    document_url: Url,
    loaded: OnceCell<()>,
}

impl Loader {
    /// Build a loader from configuration.
    ///
    /// The document location is `base_url` joined with `document.path`, so a
    /// path of `/data.json` resolves against the deployment root while
    /// `data.json` resolves relative to the base URL, per URL join semantics.
    pub fn new(config: &BrowserConfig) -> LoadResult<Self> {
        let base = Url::parse(&config.document.base_url)?;
        let document_url = base.join(&config.document.path)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.fetch.connect_secs))
            .timeout(Duration::from_secs(config.fetch.request_secs))
            .build()?;

        Ok(Self {
            client,
            document_url,
            loaded: OnceCell::new(),
        })
    }

    /// Build a loader against an explicit document URL with default timeouts.
    pub fn for_url(document_url: Url) -> LoadResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            document_url,
            loaded: OnceCell::new(),
        })
    }

    /// Where the document will be fetched from.
    pub fn document_url(&self) -> &Url {
        &self.document_url
    }

    /// Whether a load has already completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Fetch the document and populate the store. Idempotent after success.
    pub async fn load(&self, store: &RecordStore, session: &Session) -> LoadResult<()> {
        self.loaded
            .get_or_try_init(|| self.load_inner(store, session))
            .await?;
        Ok(())
    }

    async fn load_inner(&self, store: &RecordStore, session: &Session) -> LoadResult<()> {
        tracing::info!(
            url = %self.document_url,
            session_id = %session.id(),
            "Fetching documentation document"
        );

        let cancelled = session.cancelled();
        tokio::pin!(cancelled);

        let response = tokio::select! {
            r = self.client.get(self.document_url.clone()).send() => r?,
            _ = &mut cancelled => return Err(LoadError::Cancelled),
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Document endpoint returned an error status");
            return Err(LoadError::Status(status));
        }

        let body = tokio::select! {
            b = response.text() => b?,
            _ = &mut cancelled => return Err(LoadError::Cancelled),
        };

        // Parse before writing: a malformed document must not leave a
        // half-populated store behind.
        let document: Document = serde_json::from_str(&body)?;

        // The session may have been torn down between the last await and
        // here; a dead session must not observe mutation.
        if session.is_cancelled() {
            return Err(LoadError::Cancelled);
        }

        let records = document.record_count();
        store.push_document(document);
        tracing::info!(records, session_id = %session.id(), "Document load complete");

        Ok(())
    }
}
