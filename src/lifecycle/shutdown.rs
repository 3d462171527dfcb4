//! Cancellation of in-flight commands.

use std::future::Future;

use std::sync::Arc;

use tokio::sync::watch;

/// One-way "stop" flag shared by the signal handler and every network phase
/// of a command.
///
/// The flag is sticky: a receiver subscribed after the trigger still sees it.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once shutdown is triggered. A dropped coordinator never cancels.
pub async fn cancelled(rx: &mut watch::Receiver<bool>) {
    if rx.wait_for(|triggered| *triggered).await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Run `work` unless shutdown fires first; `None` means it was cancelled.
///
/// A trigger that already happened wins over work that would complete
/// immediately.
pub async fn unless_cancelled<F: Future>(
    rx: &mut watch::Receiver<bool>,
    work: F,
) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = cancelled(rx) => None,
        output = work => Some(output),
    }
}
