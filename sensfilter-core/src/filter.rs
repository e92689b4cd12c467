// sensfilter-core/src/filter.rs
//! The sensitive-word filter: vocabulary mutation and query entry points.
//!
//! The filter publishes its vocabulary as immutable generations. A query pins
//! the generation that is current when it starts and reads it without further
//! locking, so it never sees a half-applied batch or stale fail links. A
//! mutation batch clones the current trie, applies every word, rebuilds the
//! fail links once (for strategies that need them) and swaps the new
//! generation in. Batches are serialized against each other by a writer lock.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::automaton::build_fail_links;
use crate::config::{FilterConfig, IngestConfig};
use crate::engine::{ScanEngine, ScanStrategy};
use crate::query::Query;
use crate::trie::{DeletePolicy, Trie};
use crate::word_match::{log_word_mutation_debug, SensitiveMatch};

/// Construction options for a [`SensitiveFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub strategy: ScanStrategy,
    pub delete_policy: DeletePolicy,
    /// Batching used by [`SensitiveFilter::listen`].
    pub ingest: IngestConfig,
}

/// One published, immutable state of the vocabulary.
#[derive(Debug)]
pub struct Generation {
    id: u64,
    trie: Trie,
}

impl Generation {
    /// Monotonic generation number; `0` is the empty vocabulary at construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

/// A pinned generation plus the engine that scans it.
///
/// All queries on one snapshot see the same vocabulary, no matter what
/// mutations land on the filter in the meantime.
#[derive(Debug, Clone)]
pub struct Snapshot {
    generation: Arc<Generation>,
    engine: Arc<dyn ScanEngine>,
}

impl Snapshot {
    fn query(&self) -> Query<'_> {
        Query::new(self.engine.as_ref(), &self.generation.trie)
    }

    pub fn generation(&self) -> u64 {
        self.generation.id
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.engine.strategy()
    }

    pub fn len(&self) -> usize {
        self.generation.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation.trie.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.generation.trie.contains(word)
    }

    pub fn words(&self) -> Vec<String> {
        self.generation.trie.words()
    }

    pub fn find_matches(&self, text: &str) -> Vec<SensitiveMatch> {
        self.query().find_matches(text)
    }

    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.query().find_all(text)
    }

    pub fn find_all_count(&self, text: &str) -> HashMap<String, usize> {
        self.query().find_all_count(text)
    }

    pub fn find_one(&self, text: &str) -> Option<String> {
        self.query().find_one(text)
    }

    pub fn is_sensitive(&self, text: &str) -> bool {
        self.query().is_sensitive(text)
    }

    pub fn replace(&self, text: &str, repl: char) -> String {
        self.query().replace(text, repl)
    }

    pub fn remove(&self, text: &str) -> String {
        self.query().remove(text)
    }
}

/// A dynamic vocabulary of sensitive words with concurrent queries.
///
/// `SensitiveFilter` is `Send + Sync`; share it behind an `Arc` to mutate and
/// query from several threads or tasks.
#[derive(Debug)]
pub struct SensitiveFilter {
    engine: Arc<dyn ScanEngine>,
    options: FilterOptions,
    current: RwLock<Arc<Generation>>,
    writer: Mutex<()>,
}

impl SensitiveFilter {
    /// Creates an empty filter using `strategy` and the default delete policy.
    pub fn new(strategy: ScanStrategy) -> Self {
        Self::with_options(FilterOptions {
            strategy,
            ..FilterOptions::default()
        })
    }

    pub fn with_options(options: FilterOptions) -> Self {
        Self {
            engine: Arc::from(options.strategy.engine()),
            options,
            current: RwLock::new(Arc::new(Generation { id: 0, trie: Trie::new() })),
            writer: Mutex::new(()),
        }
    }

    /// Builds a filter from a configuration, loading its inline words and
    /// word list files as the first generation.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let filter = Self::with_options(config.options());
        let words = config
            .load_words()
            .context("Failed to load the initial vocabulary")?;
        let added = filter.add_words(&words);
        info!(
            "Initialized {} filter with {} words ({} supplied).",
            filter.options.strategy,
            added,
            words.len()
        );
        Ok(filter)
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    pub fn strategy(&self) -> ScanStrategy {
        self.options.strategy
    }

    /// Pins the current generation.
    pub fn snapshot(&self) -> Snapshot {
        let generation = {
            let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(&*guard)
        };
        Snapshot {
            generation,
            engine: Arc::clone(&self.engine),
        }
    }

    pub fn generation(&self) -> u64 {
        self.snapshot().generation()
    }

    /// Adds one word. Returns `true` when the vocabulary changed.
    pub fn add_word(&self, word: &str) -> bool {
        self.add_words([word]) > 0
    }

    /// Adds a batch of words and publishes them as one generation.
    /// Empty and already present words are skipped. Returns the number added.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.apply_batch("add", |trie| {
            let mut added = 0;
            for word in words {
                let word = word.as_ref();
                if word.is_empty() {
                    warn!("Ignoring empty word in add batch.");
                    continue;
                }
                let inserted = trie.insert_word(word);
                log_word_mutation_debug(module_path!(), "add", word, inserted);
                added += usize::from(inserted);
            }
            added
        })
    }

    /// Deletes one word. Deleting an absent word is a no-op.
    /// Returns `true` when the vocabulary changed.
    pub fn del_word(&self, word: &str) -> bool {
        self.del_words([word]) > 0
    }

    /// Deletes a batch of words and publishes the result as one generation.
    ///
    /// Returns how many stored words disappeared. Under
    /// [`DeletePolicy::LastLeafEdge`] this can exceed the batch size.
    pub fn del_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let policy = self.options.delete_policy;
        self.apply_batch("delete", |trie| {
            let mut removed = 0;
            for word in words {
                let word = word.as_ref();
                let gone = trie.remove_word(word, policy);
                log_word_mutation_debug(module_path!(), "delete", word, gone > 0);
                removed += gone;
            }
            removed
        })
    }

    fn apply_batch<F>(&self, action: &str, mutate: F) -> usize
    where
        F: FnOnce(&mut Trie) -> usize,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let base = self.snapshot().generation;

        let mut trie = base.trie.clone();
        let changed = mutate(&mut trie);
        if changed == 0 {
            debug!("{} batch left generation {} unchanged.", action, base.id);
            return 0;
        }

        if self.engine.needs_fail_links() {
            build_fail_links(&mut trie);
        }

        let next = Arc::new(Generation { id: base.id + 1, trie });
        debug!(
            "Publishing generation {} after {} batch: {} words changed, {} words stored, {} nodes.",
            next.id,
            action,
            changed,
            next.trie.len(),
            next.trie.node_count()
        );
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
        changed
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.snapshot().contains(word)
    }

    pub fn words(&self) -> Vec<String> {
        self.snapshot().words()
    }

    pub fn find_matches(&self, text: &str) -> Vec<SensitiveMatch> {
        self.snapshot().find_matches(text)
    }

    /// Distinct matched words in first-seen order.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.snapshot().find_all(text)
    }

    /// Occurrence count per matched word.
    pub fn find_all_count(&self, text: &str) -> HashMap<String, usize> {
        self.snapshot().find_all_count(text)
    }

    /// The first match of a left-to-right scan, if any.
    pub fn find_one(&self, text: &str) -> Option<String> {
        self.snapshot().find_one(text)
    }

    pub fn is_sensitive(&self, text: &str) -> bool {
        self.snapshot().is_sensitive(text)
    }

    /// Overwrites every matched code point with `repl`.
    pub fn replace(&self, text: &str, repl: char) -> String {
        self.snapshot().replace(text, repl)
    }

    /// Deletes every matched code point.
    pub fn remove(&self, text: &str) -> String {
        self.snapshot().remove(text)
    }
}

impl Default for SensitiveFilter {
    fn default() -> Self {
        Self::with_options(FilterOptions::default())
    }
}
