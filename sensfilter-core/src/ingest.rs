// sensfilter-core/src/ingest.rs
//! Streaming vocabulary ingestion.
//!
//! [`SensitiveFilter::listen`] drains two queues of words, one of additions and
//! one of deletions, each on its own tokio task. Words are coalesced into
//! micro-batches so that a burst of updates costs one generation (and one
//! fail-link rebuild) instead of one per word.
//!
//! A batch is closed when any of these happens:
//! - it holds `max_batch` words;
//! - the queue stays empty for `linger` after the last word arrived;
//! - the queue is closed by every sender.
//!
//! A word sent while a batch is being flushed lands in the next batch; every
//! word sent before the queue closes is eventually applied.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::IngestConfig;
use crate::filter::SensitiveFilter;

/// Groups queued words into bounded batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroBatcher {
    max_batch: usize,
    linger: Duration,
}

impl MicroBatcher {
    /// `max_batch` is clamped to at least one word.
    pub fn new(max_batch: usize, linger: Duration) -> Self {
        Self {
            max_batch: max_batch.max(1),
            linger,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.max_batch, config.linger())
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    pub fn linger(&self) -> Duration {
        self.linger
    }

    /// Waits for the next batch. Returns `None` once the queue is closed and
    /// fully drained.
    pub async fn next_batch(&self, rx: &mut UnboundedReceiver<String>) -> Option<Vec<String>> {
        let first = rx.recv().await?;
        let mut batch = vec![first];

        let mut deadline = Instant::now() + self.linger;
        while batch.len() < self.max_batch {
            match rx.try_recv() {
                Ok(word) => {
                    batch.push(word);
                    deadline = Instant::now() + self.linger;
                }
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => match tokio::time::timeout_at(deadline, rx.recv()).await {
                    Ok(Some(word)) => {
                        batch.push(word);
                        deadline = Instant::now() + self.linger;
                    }
                    Ok(None) | Err(_) => break,
                },
            }
        }
        Some(batch)
    }
}

impl Default for MicroBatcher {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

/// Totals reported by one drain task when its queue closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestStats {
    /// Batches flushed to the filter.
    pub batches: usize,
    /// Words received from the queue.
    pub received: usize,
    /// Stored words the batches added or removed.
    pub changed: usize,
}

/// Handles to the two drain tasks started by [`SensitiveFilter::listen`].
#[derive(Debug)]
pub struct ListenHandle {
    additions: JoinHandle<IngestStats>,
    deletions: JoinHandle<IngestStats>,
}

impl ListenHandle {
    /// Waits for both queues to close and drain. Returns the addition and
    /// deletion stats; a task that panicked or was aborted reports defaults.
    pub async fn join(self) -> (IngestStats, IngestStats) {
        let (additions, deletions) = tokio::join!(self.additions, self.deletions);
        let unwrap_stats = |result: Result<IngestStats, tokio::task::JoinError>, queue: &str| {
            result.unwrap_or_else(|e| {
                error!("Ingestion task for {} queue ended abnormally: {}", queue, e);
                IngestStats::default()
            })
        };
        (unwrap_stats(additions, "add"), unwrap_stats(deletions, "delete"))
    }

    /// Stops both tasks without waiting for their queues to drain.
    pub fn abort(&self) {
        self.additions.abort();
        self.deletions.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.additions.is_finished() && self.deletions.is_finished()
    }
}

#[derive(Debug, Clone, Copy)]
enum QueueKind {
    Add,
    Delete,
}

impl QueueKind {
    fn name(self) -> &'static str {
        match self {
            QueueKind::Add => "add",
            QueueKind::Delete => "delete",
        }
    }
}

impl SensitiveFilter {
    /// Starts draining `add_rx` and `del_rx` on two background tasks, batching
    /// as configured in [`FilterOptions::ingest`](crate::filter::FilterOptions).
    ///
    /// Must be called from within a tokio runtime.
    pub fn listen(
        self: &Arc<Self>,
        add_rx: UnboundedReceiver<String>,
        del_rx: UnboundedReceiver<String>,
    ) -> ListenHandle {
        let batcher = MicroBatcher::from_config(&self.options().ingest);
        self.listen_with(batcher, add_rx, del_rx)
    }

    /// Like [`SensitiveFilter::listen`] with an explicit batching policy.
    pub fn listen_with(
        self: &Arc<Self>,
        batcher: MicroBatcher,
        add_rx: UnboundedReceiver<String>,
        del_rx: UnboundedReceiver<String>,
    ) -> ListenHandle {
        info!(
            "Listening for vocabulary updates (max batch {}, linger {:?}).",
            batcher.max_batch(),
            batcher.linger()
        );
        ListenHandle {
            additions: tokio::spawn(drain(Arc::clone(self), batcher, add_rx, QueueKind::Add)),
            deletions: tokio::spawn(drain(Arc::clone(self), batcher, del_rx, QueueKind::Delete)),
        }
    }
}

async fn drain(
    filter: Arc<SensitiveFilter>,
    batcher: MicroBatcher,
    mut rx: UnboundedReceiver<String>,
    kind: QueueKind,
) -> IngestStats {
    let mut stats = IngestStats::default();

    while let Some(batch) = batcher.next_batch(&mut rx).await {
        let size = batch.len();
        let target = Arc::clone(&filter);
        // Cloning the trie and rebuilding fail links is CPU work; keep it off the async workers.
        let applied = tokio::task::spawn_blocking(move || match kind {
            QueueKind::Add => target.add_words(&batch),
            QueueKind::Delete => target.del_words(&batch),
        })
        .await;

        match applied {
            Ok(changed) => {
                stats.batches += 1;
                stats.received += size;
                stats.changed += changed;
                debug!(
                    "Flushed {} batch of {} words ({} changed).",
                    kind.name(),
                    size,
                    changed
                );
            }
            Err(e) => error!("Failed to apply {} batch of {} words: {}", kind.name(), size, e),
        }
    }

    info!(
        "{} queue closed after {} batches ({} words received).",
        kind.name(),
        stats.batches,
        stats.received
    );
    stats
}
