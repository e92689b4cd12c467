//! The query operations shared by every scanning strategy.
//!
//! Each operation drives [`ScanEngine::scan`] with its own per-match callback.
//! Scanning never mutates anything, so running the same query twice over the
//! same trie gives the same answer.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use crate::engine::{ScanEngine, WordMatch};
use crate::trie::Trie;
use crate::word_match::SensitiveMatch;

/// A scanning strategy paired with the trie it scans.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    engine: &'a dyn ScanEngine,
    trie: &'a Trie,
}

impl<'a> Query<'a> {
    pub fn new(engine: &'a dyn ScanEngine, trie: &'a Trie) -> Self {
        Self { engine, trie }
    }

    fn each_match<F>(&self, chars: &[char], mut visit: F)
    where
        F: FnMut(WordMatch<'a>) -> ControlFlow<()>,
    {
        self.engine.scan(self.trie, chars, &mut visit);
    }

    /// Every emitted match with its code-point span, in emission order.
    pub fn find_matches(&self, text: &str) -> Vec<SensitiveMatch> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        self.each_match(&chars, |m| {
            out.push(SensitiveMatch {
                word: m.word.to_string(),
                start: m.start,
                end: m.end,
            });
            ControlFlow::Continue(())
        });
        out
    }

    /// Distinct matched words in first-seen order.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut out = Vec::new();
        self.each_match(&chars, |m| {
            if seen.insert(m.word) {
                out.push(m.word.to_string());
            }
            ControlFlow::Continue(())
        });
        out
    }

    /// Occurrence count per matched word, overlapping occurrences included.
    pub fn find_all_count(&self, text: &str) -> HashMap<String, usize> {
        let chars: Vec<char> = text.chars().collect();
        let mut counts: HashMap<&'a str, usize> = HashMap::new();
        self.each_match(&chars, |m| {
            *counts.entry(m.word).or_insert(0) += 1;
            ControlFlow::Continue(())
        });
        counts
            .into_iter()
            .map(|(word, n)| (word.to_string(), n))
            .collect()
    }

    /// The first match emitted by a left-to-right scan; the scan stops there.
    pub fn find_one(&self, text: &str) -> Option<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut first = None;
        self.each_match(&chars, |m| {
            first = Some(m.word.to_string());
            ControlFlow::Break(())
        });
        first
    }

    pub fn is_sensitive(&self, text: &str) -> bool {
        self.find_one(text).is_some()
    }

    /// Overwrites every code point covered by a match with `repl`.
    /// The result has exactly as many code points as `text`.
    pub fn replace(&self, text: &str, repl: char) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        self.each_match(&chars, |m| {
            spans.push(m.start..m.end);
            ControlFlow::Continue(())
        });
        for span in spans {
            chars[span].fill(repl);
        }
        chars.into_iter().collect()
    }

    /// Deletes every code point covered by at least one match.
    ///
    /// The scan runs over the untouched input and deletions are applied
    /// afterwards, so removing one word never shifts or hides the next one,
    /// and a position covered by several overlapping matches goes once.
    pub fn remove(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut covered = vec![false; chars.len()];
        self.each_match(&chars, |m| {
            covered[m.start..m.end].fill(true);
            ControlFlow::Continue(())
        });
        chars
            .iter()
            .zip(covered)
            .filter_map(|(&c, hit)| (!hit).then_some(c))
            .collect()
    }
}
