// sensfilter-core/src/engines/greedy.rs
//! A `ScanEngine` implementation that restarts on mismatch.
//!
//! The scanner keeps `{start, pos, parent}`. It descends from `parent` while
//! edges exist, reporting `[start, pos]` whenever it lands on a leaf. When no
//! edge exists, or when it has consumed the last code point of the text, it
//! goes back to the root and restarts one code point after `start`. No fail
//! links are used, so the worst case rescans each offset up to the longest
//! word's length.
//!
//! The transitions, in the order they are checked at each step:
//!
//! | situation at `pos`                         | action                                   |
//! |--------------------------------------------|------------------------------------------|
//! | no edge from `parent` on `text[pos]`       | restart: `parent = root`, `pos = ++start` |
//! | edge to a leaf                             | emit `[start, pos]`, then fall through    |
//! | `pos` is the last position                 | restart (also right after an emit)        |
//! | otherwise                                  | `parent = child`, `pos += 1`             |
//!
//! License: MIT OR APACHE 2.0

use crate::engine::{MatchVisitor, ScanEngine, ScanStrategy, WordMatch};
use crate::trie::Trie;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl ScanEngine for GreedyEngine {
    fn strategy(&self) -> ScanStrategy {
        ScanStrategy::Greedy
    }

    fn needs_fail_links(&self) -> bool {
        false
    }

    fn scan<'t>(&self, trie: &'t Trie, text: &[char], visit: &mut MatchVisitor<'_, 't>) {
        let root = trie.root();
        let len = text.len();
        let mut start = 0;
        let mut pos = 0;
        let mut parent = root;

        while pos < len {
            let Some(child) = trie.child(parent, text[pos]) else {
                parent = root;
                start += 1;
                pos = start;
                continue;
            };

            let node = trie.node(child);
            if let Some(word) = node.word() {
                if start <= pos {
                    let hit = WordMatch { word, start, end: pos + 1 };
                    if visit(hit).is_break() {
                        return;
                    }
                }
            }

            if pos == len - 1 {
                parent = root;
                start += 1;
                pos = start;
                continue;
            }

            parent = child;
            pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::ControlFlow;

    fn trie(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.insert_word(w);
        }
        trie
    }

    fn hits(trie: &Trie, text: &str) -> Vec<(String, usize, usize)> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        GreedyEngine.scan(trie, &chars, &mut |m| {
            out.push((m.word.to_string(), m.start, m.end));
            ControlFlow::Continue(())
        });
        out
    }

    #[test]
    fn test_usher_reference_run() {
        let trie = trie(&["she", "he", "her"]);
        assert_eq!(
            hits(&trie, "usher"),
            vec![
                ("she".to_string(), 1, 4),
                ("he".to_string(), 2, 4),
                ("her".to_string(), 2, 5),
            ]
        );
    }

    #[test]
    fn test_badword_reports_by_start_offset() {
        let trie = trie(&["bad", "word", "badword"]);
        // Matches starting at the same offset come out shortest first, and
        // offsets are visited left to right.
        assert_eq!(
            hits(&trie, "this is a badword"),
            vec![
                ("bad".to_string(), 10, 13),
                ("badword".to_string(), 10, 17),
                ("word".to_string(), 13, 17),
            ]
        );
    }

    #[test]
    fn test_leaf_on_last_position_is_reported_once() {
        let trie = trie(&["ab", "b"]);
        assert_eq!(
            hits(&trie, "ab"),
            vec![("ab".to_string(), 0, 2), ("b".to_string(), 1, 2)]
        );
    }

    #[test]
    fn test_restart_after_partial_prefix() {
        // "aab" first descends a-a, fails on b, then restarts at offset 1.
        let trie = trie(&["ab"]);
        assert_eq!(hits(&trie, "aab"), vec![("ab".to_string(), 1, 3)]);
    }

    #[test]
    fn test_repeated_single_char_word() {
        let trie = trie(&["aa"]);
        assert_eq!(
            hits(&trie, "aaaa"),
            vec![
                ("aa".to_string(), 0, 2),
                ("aa".to_string(), 1, 3),
                ("aa".to_string(), 2, 4),
            ]
        );
    }

    #[test]
    fn test_break_stops_scan() {
        let trie = trie(&["a"]);
        let chars: Vec<char> = "aaa".chars().collect();
        let mut seen = 0;
        GreedyEngine.scan(&trie, &chars, &mut |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(hits(&trie(&[]), "text").is_empty());
        assert!(hits(&trie(&["bad"]), "").is_empty());
    }
}
