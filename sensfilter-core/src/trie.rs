//! The node store shared by every scanning strategy.
//!
//! Nodes live in an arena (`Vec<TrieNode>`) and refer to each other through
//! [`NodeId`] indices: the ownership tree through `children`/`parent`, and the
//! Aho–Corasick fail links as a second, non-owning graph over the same slots.
//! Slots released by deletions go to a free list and are reused by later
//! insertions.
//!
//! Exclusive access (`add_child`, `del_child`, word insertion/removal) needs
//! `&mut Trie`; lookups only need `&Trie`. Sharing across threads is handled
//! by the generation swap in [`crate::filter`], never by locks inside the trie.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`Trie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Its code point is a sentinel and it is never a leaf.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// How [`Trie::remove_word`] prunes structure after clearing a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Prune only nodes no remaining word passes through.
    #[default]
    RefCounted,
    /// Cut the edge into the last leaf met along the word's path, dropping
    /// the whole subtree below it. Longer words that extend that leaf are
    /// lost with it.
    LastLeafEdge,
}

/// One code point on some word's path.
#[derive(Debug, Clone)]
pub struct TrieNode {
    value: char,
    depth: usize,
    parent: Option<NodeId>,
    children: HashMap<char, NodeId>,
    word: Option<Arc<str>>,
    fail: Option<NodeId>,
    passing: usize,
}

impl TrieNode {
    fn new(value: char, parent: Option<NodeId>, depth: usize) -> Self {
        Self {
            value,
            depth,
            parent,
            children: HashMap::new(),
            word: None,
            fail: None,
            passing: 0,
        }
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Number of code points on the path from the root to this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The complete word ending here, if this node is a leaf.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.word.is_some()
    }

    pub fn fail(&self) -> Option<NodeId> {
        self.fail
    }

    /// Number of stored words whose path passes through or ends at this node.
    pub fn passing(&self) -> usize {
        self.passing
    }

    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&c, &id)| (c, id))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Prefix tree over `char`s holding the sensitive vocabulary.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    free_list: Vec<NodeId>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new('\0', None, 0)],
            free_list: Vec::new(),
            word_count: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Length in code points of the longest stored word.
    #[cfg(test)]
    pub(crate) fn max_depth(&self) -> usize {
        self.live_nodes()
            .filter(|&id| self.node(id).is_leaf())
            .map(|id| self.node(id).depth)
            .max()
            .unwrap_or(0)
    }

    pub fn child(&self, id: NodeId, c: char) -> Option<NodeId> {
        self.nodes[id.0].children.get(&c).copied()
    }

    pub fn fail(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].fail
    }

    pub(crate) fn set_fail(&mut self, id: NodeId, fail: Option<NodeId>) {
        self.nodes[id.0].fail = fail;
    }

    /// Links a fresh child under `id` for `c` and returns it. If the edge
    /// already exists the existing child is returned unchanged.
    pub fn add_child(&mut self, id: NodeId, c: char) -> NodeId {
        if let Some(existing) = self.child(id, c) {
            return existing;
        }
        let depth = self.nodes[id.0].depth + 1;
        let node = TrieNode::new(c, Some(id), depth);
        let child = match self.free_list.pop() {
            Some(slot) => {
                self.nodes[slot.0] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.nodes[id.0].children.insert(c, child);
        child
    }

    /// Removes the edge `id --c-->` and releases the whole subtree below it.
    ///
    /// Returns the number of stored words that lived in the pruned subtree.
    /// Ancestor `passing` counts and the word count are adjusted accordingly.
    pub fn del_child(&mut self, id: NodeId, c: char) -> usize {
        let Some(child) = self.nodes[id.0].children.remove(&c) else {
            return 0;
        };

        let mut pruned = 0;
        let mut stack = vec![child];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            if node.word.is_some() {
                pruned += 1;
            }
            stack.extend(node.children.drain().map(|(_, next)| next));
            *node = TrieNode::new('\0', None, 0);
            self.free_list.push(current);
        }

        if pruned > 0 {
            let mut ancestor = Some(id);
            while let Some(a) = ancestor {
                let node = &mut self.nodes[a.0];
                node.passing = node.passing.saturating_sub(pruned);
                ancestor = node.parent;
            }
            self.word_count -= pruned;
        }
        pruned
    }

    /// Follows `word` from the root, returning the node it ends on.
    pub fn follow(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(NodeId::ROOT, |current, c| self.child(current, c))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.follow(word)
            .is_some_and(|id| id != NodeId::ROOT && self.node(id).is_leaf())
    }

    /// Walks/creates the path for `word` and marks its last node as a leaf.
    ///
    /// Returns `false` when the word was already present or is empty.
    pub fn insert_word(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains(word) {
            return false;
        }

        let mut current = NodeId::ROOT;
        self.nodes[current.0].passing += 1;
        for c in word.chars() {
            current = self.add_child(current, c);
            self.nodes[current.0].passing += 1;
        }
        self.nodes[current.0].word = Some(Arc::from(word));
        self.word_count += 1;
        true
    }

    /// Removes `word` following `policy`. Returns the number of stored words
    /// that disappeared; `0` when the word was not found.
    pub fn remove_word(&mut self, word: &str, policy: DeletePolicy) -> usize {
        match policy {
            DeletePolicy::RefCounted => usize::from(self.remove_ref_counted(word)),
            DeletePolicy::LastLeafEdge => self.remove_last_leaf_edge(word),
        }
    }

    fn remove_ref_counted(&mut self, word: &str) -> bool {
        let Some(terminal) = self.follow(word) else {
            return false;
        };
        if terminal == NodeId::ROOT || !self.nodes[terminal.0].is_leaf() {
            return false;
        }

        self.nodes[terminal.0].word = None;
        self.word_count -= 1;

        // Walk back up to the root, remembering the shallowest node left
        // without any word passing through it.
        let mut prune: Option<(NodeId, char)> = None;
        let mut current = terminal;
        loop {
            let node = &mut self.nodes[current.0];
            node.passing -= 1;
            let Some(parent) = node.parent else { break };
            if node.passing == 0 {
                prune = Some((parent, node.value));
            }
            current = parent;
        }

        if let Some((parent, c)) = prune {
            // Nothing below the pruned edge holds a word, so no counts change.
            let pruned = self.del_child(parent, c);
            debug_assert_eq!(pruned, 0);
        }
        true
    }

    fn remove_last_leaf_edge(&mut self, word: &str) -> usize {
        let mut last_leaf: Option<(NodeId, char)> = None;
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            let Some(next) = self.child(current, c) else {
                return 0;
            };
            if self.nodes[next.0].is_leaf() {
                last_leaf = Some((current, c));
            }
            current = next;
        }

        match last_leaf {
            Some((parent, c)) => self.del_child(parent, c),
            None => 0,
        }
    }

    /// All stored words, in depth-first order over sorted edges.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if let Some(word) = node.word() {
                out.push(word.to_string());
            }
            let mut children: Vec<(char, NodeId)> = node.children().collect();
            children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            stack.extend(children.into_iter().map(|(_, next)| next));
        }
        out
    }

    #[cfg(test)]
    fn live_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![NodeId::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.node(id).children.values().copied());
            Some(id)
        })
    }
}
