// sensfilter-core/src/engines/aho_corasick.rs
//! A `ScanEngine` implementation that walks an Aho–Corasick automaton.
//!
//! On a mismatch the scan follows fail links instead of re-reading input, so
//! the cost is linear in the text length regardless of vocabulary size. After
//! each step the fail chain of the current node is walked so that every word
//! ending at the current position is reported, including overlapping ones
//! ("she", "he" and "her" inside "usher").
//!
//! License: MIT OR APACHE 2.0

use crate::engine::{MatchVisitor, ScanEngine, ScanStrategy, WordMatch};
use crate::trie::Trie;

#[derive(Debug, Clone, Copy, Default)]
pub struct AhoCorasickEngine;

impl ScanEngine for AhoCorasickEngine {
    fn strategy(&self) -> ScanStrategy {
        ScanStrategy::AhoCorasick
    }

    fn needs_fail_links(&self) -> bool {
        true
    }

    fn scan<'t>(&self, trie: &'t Trie, text: &[char], visit: &mut MatchVisitor<'_, 't>) {
        let root = trie.root();
        let mut current = root;

        for (pos, &c) in text.iter().enumerate() {
            // A missing fail link only happens on an unbuilt trie; treat it as the root.
            while current != root && trie.child(current, c).is_none() {
                current = trie.fail(current).unwrap_or(root);
            }
            current = trie.child(current, c).unwrap_or(root);

            let mut probe = current;
            while probe != root {
                let node = trie.node(probe);
                if let Some(word) = node.word() {
                    let hit = WordMatch {
                        word,
                        start: pos + 1 - node.depth(),
                        end: pos + 1,
                    };
                    if visit(hit).is_break() {
                        return;
                    }
                }
                probe = node.fail().unwrap_or(root);
            }
        }
    }
}
