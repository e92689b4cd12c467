// sensfilter-core/src/engine.rs
//! Defines the core `ScanEngine` trait and related data structures.
//!
//! A `ScanEngine` is a scanning strategy over a vocabulary [`Trie`]. Every
//! query operation (find, count, replace, remove) is built on top of the one
//! primitive engines provide: walk the text left to right and report each
//! match to a callback, which may stop the scan early.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::engines::aho_corasick::AhoCorasickEngine;
use crate::engines::greedy::GreedyEngine;
use crate::trie::Trie;

/// A match reported by an engine while scanning.
///
/// The word borrows from the trie being scanned. `start` and `end` are
/// code-point offsets into the scanned text; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch<'t> {
    pub word: &'t str,
    pub start: usize,
    pub end: usize,
}

/// Callback invoked for every match; `ControlFlow::Break` stops the scan.
pub type MatchVisitor<'v, 't> = dyn FnMut(WordMatch<'t>) -> ControlFlow<()> + 'v;

/// A trait that defines the core functionality of a scanning strategy.
///
/// Engines are stateless: all per-scan state lives on the stack of
/// [`ScanEngine::scan`], so one engine can serve any number of concurrent
/// scans over any number of tries.
pub trait ScanEngine: Send + Sync + fmt::Debug {
    /// Which strategy this engine implements.
    fn strategy(&self) -> ScanStrategy;

    /// Whether the trie must carry freshly built fail links before scanning.
    fn needs_fail_links(&self) -> bool;

    /// Scans `text` against `trie`, reporting matches in emission order.
    fn scan<'t>(&self, trie: &'t Trie, text: &[char], visit: &mut MatchVisitor<'_, 't>);
}

/// Selects which scanning strategy a filter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Aho–Corasick automaton with fail-link backtracking. Linear in the text
    /// length and reports every overlapping occurrence.
    #[default]
    AhoCorasick,
    /// Restart-on-mismatch scanner without auxiliary links.
    Greedy,
}

impl ScanStrategy {
    /// Instantiates the engine implementing this strategy.
    pub fn engine(self) -> Box<dyn ScanEngine> {
        match self {
            ScanStrategy::AhoCorasick => Box::new(AhoCorasickEngine),
            ScanStrategy::Greedy => Box::new(GreedyEngine),
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStrategy::AhoCorasick => write!(f, "aho-corasick"),
            ScanStrategy::Greedy => write!(f, "greedy"),
        }
    }
}
