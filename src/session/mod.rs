//! Navigation session lifecycle.
//!
//! # Data Flow
//! ```text
//! navigation start → Session::new()
//!     → handed to the loader alongside the store
//!
//! navigation aborted → session.cancel()
//!     → loader's in-flight fetch loses the select! race
//!     → late completion performs no store mutation
//! ```
//!
//! # Design Decisions
//! - watch channel rather than broadcast: the token is level-triggered
//!   (observers that subscribe after cancellation still see it) and supports
//!   a synchronous is_cancelled check
//! - cancel() is idempotent; clones share the same token

use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

/// Cancellation token tied to one navigation session.
#[derive(Clone)]
pub struct Session {
    id: Uuid,
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Session {
    /// Start a fresh, uncancelled session.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Navigation session started");
        Self {
            id,
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Session identifier, for correlating log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Signal teardown. Idempotent.
    pub fn cancel(&self) {
        tracing::debug!(session_id = %self.id, "Navigation session cancelled");
        let _ = self.tx.send(true);
    }

    /// Synchronous check of the token.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves when the session is cancelled; pends forever otherwise.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender kept alive by every Session clone; unreachable while
                // a caller holds &self. Pend rather than resolve spuriously.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_is_observed() {
        let session = Session::new();
        assert!(!session.is_cancelled());

        session.cancel();
        assert!(session.is_cancelled());

        // Level-triggered: the future resolves even after the fact.
        tokio::time::timeout(Duration::from_millis(100), session.cancelled())
            .await
            .expect("cancelled() should resolve immediately");
    }

    #[tokio::test]
    async fn test_clones_share_the_token() {
        let session = Session::new();
        let observer = session.clone();

        let waiter = tokio::spawn(async move { observer.cancelled().await });
        session.cancel();

        tokio::time::timeout(Duration::from_millis(100), waiter)
            .await
            .expect("clone should observe cancellation")
            .unwrap();
    }

    #[tokio::test]
    async fn test_uncancelled_session_pends() {
        let session = Session::new();
        let result =
            tokio::time::timeout(Duration::from_millis(50), session.cancelled()).await;
        assert!(result.is_err(), "cancelled() must not resolve spuriously");
    }
}
