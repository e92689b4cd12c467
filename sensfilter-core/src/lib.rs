// sensfilter-core/src/lib.rs
//! # sensfilter Core Library
//!
//! `sensfilter-core` detects, counts, replaces and removes occurrences of a
//! dynamic vocabulary of sensitive words inside arbitrary text. The vocabulary
//! can be changed while queries run: word by word, in batches, or streamed in
//! through two tokio queues.
//!
//! Matching is exact over Unicode scalar values (`char`). No normalization or
//! case folding is applied, and every code point is an opaque unit.
//!
//! ## Modules
//!
//! * `trie`: The node store shared by every strategy (arena of `char`-keyed nodes).
//! * `automaton`: Builds the Aho–Corasick fail links over a trie.
//! * `engine`: Defines the `ScanEngine` trait and `ScanStrategy` selector.
//! * `engines`: The Aho–Corasick and greedy restart-based scanners.
//! * `query`: Find/count/replace/remove built on the engines' match callback.
//! * `filter`: `SensitiveFilter`, its generations and pinned snapshots.
//! * `ingest`: Micro-batched streaming ingestion of additions and deletions.
//! * `config`: YAML configuration loading and validation.
//! * `wordlist`: Plain-text word list parsing.
//! * `word_match`: Match records and PII-safe logging helpers.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensfilter_core::{ScanStrategy, SensitiveFilter};
//!
//! let filter = SensitiveFilter::new(ScanStrategy::AhoCorasick);
//! filter.add_words(["bad", "word", "badword"]);
//!
//! assert_eq!(filter.find_one("this is a badword").as_deref(), Some("bad"));
//! assert_eq!(filter.find_all("this is a badword"), vec!["bad", "badword", "word"]);
//! assert_eq!(filter.replace("a badword", '*'), "a *******");
//! assert_eq!(filter.remove("xbadwordy"), "xy");
//!
//! filter.del_word("bad");
//! assert!(filter.is_sensitive("badword"));
//! ```
//!
//! ## Concurrency
//!
//! Every batch mutation publishes a new immutable generation of the trie.
//! Queries pin the generation current at call start, so a query never sees a
//! partially applied batch. Use [`SensitiveFilter::snapshot`] to run several
//! queries against one generation.
//!
//! ## Error Handling
//!
//! Queries and mutations are infallible: no match is an empty result and
//! deleting an unknown word does nothing. Loading configuration and word lists
//! returns `anyhow::Result` or [`FilterError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod automaton;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter;
pub mod ingest;
pub mod query;
pub mod trie;
pub mod word_match;
pub mod wordlist;

/// Re-exports the configuration types.
pub use config::{default_config_path, FilterConfig, IngestConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the scanning strategy trait and selector.
pub use engine::{ScanEngine, ScanStrategy, WordMatch};
pub use engines::aho_corasick::AhoCorasickEngine;
pub use engines::greedy::GreedyEngine;

/// Re-exports the filter and its snapshot types.
pub use filter::{FilterOptions, Generation, SensitiveFilter, Snapshot};

/// Re-exports streaming ingestion types.
pub use ingest::{IngestStats, ListenHandle, MicroBatcher};

pub use query::Query;
pub use trie::{DeletePolicy, NodeId, Trie, TrieNode};
pub use word_match::{redact_sensitive, SensitiveMatch};
pub use wordlist::{load_word_list, parse_word_list};
