//! Node implementation for the Lau Trie.
//!
//! Nodes live in an arena owned by the trie and refer to each other through
//! [`NodeId`] indices. The parent link is a plain index, so ascending the tree
//! never involves an ownership edge.

use std::collections::BTreeSet;

use super::error::LauTrieError;
use super::{LauTrieResult, Tag};

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) usize);

/// The root always occupies the first arena slot.
pub(crate) const ROOT: NodeId = NodeId(0);

/// A node in the Lau Trie.
///
/// `value` is the compressed edge label leading from the parent to this node.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Characters of the edge label
    pub(crate) value: Vec<char>,

    /// Depth from the root (root = 0)
    pub(crate) level: usize,

    /// Arena index of the parent, `None` for the root
    pub(crate) parent: Option<NodeId>,

    /// Arena indices of the children, in insertion order
    pub(crate) children: Vec<NodeId>,

    /// Tags of the input strings ending exactly at this node
    pub(crate) tags: BTreeSet<Tag>,
}

impl TrieNode {
    /// Creates the empty root node.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a detached node one level below `parent`.
    pub(crate) fn child_of(parent: NodeId, parent_level: usize, value: Vec<char>) -> Self {
        Self {
            value,
            level: parent_level + 1,
            parent: Some(parent),
            children: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    /// First character of the value, `None` only for the root.
    pub(crate) fn first_char(&self) -> Option<char> {
        self.value.first().copied()
    }

    /// Copies `value[start..]`.
    pub(crate) fn value_tail(&self, start: usize) -> LauTrieResult<Vec<char>> {
        let len = self.value.len();
        self.value_chunk(start, len.saturating_sub(start))
    }

    /// Copies `count` characters of the value starting at `start`.
    pub(crate) fn value_chunk(&self, start: usize, count: usize) -> LauTrieResult<Vec<char>> {
        let len = self.value.len();
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(self.value[start..end].to_vec()),
            _ => Err(LauTrieError::OutOfRange { start, count, len }),
        }
    }

    /// The value as an owned string.
    pub(crate) fn value_string(&self) -> String {
        self.value.iter().collect()
    }
}
