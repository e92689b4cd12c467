//! Aho–Corasick fail-link construction.
//!
//! Fail links depend on the shape of the whole trie, so they are only ever
//! recomputed wholesale: every vocabulary batch ends with one call to
//! [`build_fail_links`] before the trie is published for matching.
//!
//! License: MIT OR APACHE 2.0

use std::collections::VecDeque;

use log::debug;

use crate::trie::{NodeId, Trie};

/// Recomputes every fail link with a breadth-first walk from the root.
///
/// Root's direct children fail to the root. A deeper node reached from `p`
/// through `c` fails to the first child on `c` found while walking `p`'s fail
/// chain, or to the root when the chain runs out. Returns the number of nodes
/// that received a link.
pub fn build_fail_links(trie: &mut Trie) -> usize {
    let root = trie.root();
    trie.set_fail(root, None);

    let mut linked = 0;
    let mut queue = VecDeque::from([root]);
    while let Some(parent) = queue.pop_front() {
        let children: Vec<(char, NodeId)> = trie.node(parent).children().collect();
        for (c, child) in children {
            let fail = if parent == root {
                root
            } else {
                resolve_fail(trie, parent, c)
            };
            trie.set_fail(child, Some(fail));
            linked += 1;
            queue.push_back(child);
        }
    }

    debug!("Rebuilt {} fail links.", linked);
    linked
}

fn resolve_fail(trie: &Trie, parent: NodeId, c: char) -> NodeId {
    let mut probe = trie.fail(parent);
    while let Some(p) = probe {
        if let Some(next) = trie.child(p, c) {
            return next;
        }
        probe = trie.fail(p);
    }
    trie.root()
}
