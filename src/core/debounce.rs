//! Input debouncing
//!
//! Keystrokes (or transcribed voice phrases) arrive faster than it is worth
//! re-ranking. A [`Debouncer`] holds back each value until the input has been
//! quiet for a fixed period; a newer value cancels the one waiting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period used by the search box
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

pub struct Debouncer<T> {
    quiet: Duration,
    tx: mpsc::UnboundedSender<(u64, T)>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

/// Receiving end of a [`Debouncer`].
///
/// Values are tagged with the push that produced them, so one that was
/// already sent but superseded before it was read is dropped here.
#[derive(Debug)]
pub struct Settled<T> {
    rx: mpsc::UnboundedReceiver<(u64, T)>,
    generation: Arc<AtomicU64>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver that settled values arrive on.
    ///
    /// Must be used from within a tokio runtime.
    pub fn new(quiet: Duration) -> (Self, Settled<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let generation = Arc::new(AtomicU64::new(0));
        let debouncer = Self {
            quiet,
            tx,
            generation: Arc::clone(&generation),
            pending: None,
        };
        (debouncer, Settled { rx, generation })
    }

    /// Schedule `value`, cancelling whatever was still waiting
    pub fn push(&mut self, value: T) {
        self.cancel();

        let tag = self.generation.load(Ordering::SeqCst);
        let tx = self.tx.clone();
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            let _ = tx.send((tag, value));
        }));
    }
}

impl<T> Debouncer<T> {
    /// Drop the waiting value, if any, including one already sent but not
    /// yet received
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a value is waiting for the quiet period to pass
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> Settled<T> {
    fn is_current(&self, tag: u64) -> bool {
        tag == self.generation.load(Ordering::SeqCst)
    }

    /// Next settled value; `None` once the debouncer is gone.
    ///
    /// Cancel-safe, so it can sit in a `select!` loop.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            let (tag, value) = self.rx.recv().await?;
            if self.is_current(tag) {
                return Some(value);
            }
        }
    }

    /// A settled value if one is ready right now
    pub fn try_recv(&mut self) -> Option<T> {
        while let Ok((tag, value)) = self.rx.try_recv() {
            if self.is_current(tag) {
                return Some(value);
            }
        }
        None
    }
}
