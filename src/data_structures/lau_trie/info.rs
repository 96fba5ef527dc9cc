//! Public node snapshots and the descriptor-driven walker.
//!
//! Nothing in this module hands out references into the arena. Callers get
//! owned [`TrieNodeInfo`] values and move around the trie by descriptor, so
//! a snapshot that outlived a restructuring shows up as a
//! [`LauTrieError::StaleDescriptor`] instead of pointing at the wrong node.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::node::{NodeId, ROOT};
use super::{LauTrie, LauTrieError, LauTrieResult, Tag};
use crate::data_structures::tree_walker::{Node, TreeWalker};

/// Immutable snapshot of one trie node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrieNodeInfo {
    value: String,
    level: usize,
    tags: BTreeSet<Tag>,
    descriptor: String,
}

impl TrieNodeInfo {
    /// Creates a snapshot from its parts.
    pub fn new<V, D>(value: V, level: usize, tags: BTreeSet<Tag>, descriptor: D) -> Self
    where
        V: Into<String>,
        D: Into<String>,
    {
        Self {
            value: value.into(),
            level,
            tags,
            descriptor: descriptor.into(),
        }
    }

    /// Edge label leading to this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Depth of the node, 0 for the root.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Tags of the strings ending at this node.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Address of the node inside the trie it was taken from.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Whether this snapshot describes the root.
    pub fn is_root(&self) -> bool {
        self.descriptor.is_empty()
    }
}

impl Display for TrieNodeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")?;
        } else {
            f.write_str(&self.value)?;
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(Tag::to_string).collect();
            write!(f, " [{}]", tags.join(","))?;
        }
        Ok(())
    }
}

/// Descriptor-keyed access to node snapshots.
pub trait NodeInfoProvider {
    /// Snapshot of the root.
    fn root(&self) -> LauTrieResult<Node<TrieNodeInfo>>;

    /// Snapshot of the node `child` was taken from.
    ///
    /// # Errors
    ///
    /// [`LauTrieError::StaleDescriptor`] when the descriptor no longer
    /// resolves, or resolves to a node with a different value or level.
    fn descendant(&self, child: &TrieNodeInfo) -> LauTrieResult<Node<TrieNodeInfo>>;

    /// Snapshot of the parent of `info`.
    ///
    /// `None` asks for the root. Asking for the parent of the root yields
    /// `Ok(None)`.
    fn predecessor(&self, info: Option<&TrieNodeInfo>) -> LauTrieResult<Option<Node<TrieNodeInfo>>>;
}

impl LauTrie {
    fn info_of(&self, id: NodeId) -> LauTrieResult<TrieNodeInfo> {
        let node = self.node(id)?;
        Ok(TrieNodeInfo {
            value: node.value_string(),
            level: node.level,
            tags: node.tags.clone(),
            descriptor: self.descriptor_of(id)?,
        })
    }

    /// Resolves the node a snapshot was taken from.
    ///
    /// A fork can leave a descriptor pointing at a different node, so the
    /// resolved node must still carry the snapshot's value and level.
    fn resolve_snapshot(&self, info: &TrieNodeInfo) -> LauTrieResult<NodeId> {
        let id = self.resolve_or_stale(&info.descriptor)?;
        let node = self.node(id)?;
        if node.level != info.level || !node.value.iter().copied().eq(info.value.chars()) {
            tracing::warn!(
                descriptor = %info.descriptor,
                expected = %info.value,
                found = %node.value_string(),
                "descriptor resolves to a different node"
            );
            return Err(LauTrieError::StaleDescriptor {
                descriptor: info.descriptor.clone(),
            });
        }
        Ok(id)
    }

    /// Builds the public node for `id`, children resolved.
    pub(crate) fn public_node(&self, id: NodeId) -> LauTrieResult<Node<TrieNodeInfo>> {
        let value = self.info_of(id)?;
        let descendants = self
            .node(id)?
            .children
            .iter()
            .map(|child| self.info_of(*child))
            .collect::<LauTrieResult<Vec<_>>>()?;
        Ok(Node::new(value, descendants))
    }
}

impl NodeInfoProvider for LauTrie {
    fn root(&self) -> LauTrieResult<Node<TrieNodeInfo>> {
        self.public_node(ROOT)
    }

    fn descendant(&self, child: &TrieNodeInfo) -> LauTrieResult<Node<TrieNodeInfo>> {
        let id = self.resolve_snapshot(child)?;
        self.public_node(id)
    }

    fn predecessor(&self, info: Option<&TrieNodeInfo>) -> LauTrieResult<Option<Node<TrieNodeInfo>>> {
        let Some(info) = info else {
            return self.root().map(Some);
        };
        let id = self.resolve_snapshot(info)?;
        match self.node(id)?.parent {
            Some(parent) => self.public_node(parent).map(Some),
            None => Ok(None),
        }
    }
}

/// Walker over a [`LauTrie`], starting on its root.
///
/// Each walker keeps its own cursor, so several walkers over the same trie
/// do not interfere. The walker borrows the trie, which rules out inserting
/// while it is alive.
pub struct LauTrieWalker<'a> {
    provider: &'a dyn NodeInfoProvider,
    current: Option<Node<TrieNodeInfo>>,
}

impl<'a> LauTrieWalker<'a> {
    /// Creates a walker positioned on the provider's root.
    pub fn new(provider: &'a dyn NodeInfoProvider) -> LauTrieResult<Self> {
        Ok(Self {
            provider,
            current: Some(provider.root()?),
        })
    }
}

impl fmt::Debug for LauTrieWalker<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauTrieWalker")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl TreeWalker for LauTrieWalker<'_> {
    type Item = TrieNodeInfo;
    type Error = LauTrieError;

    fn current_node(&self) -> Option<&Node<TrieNodeInfo>> {
        self.current.as_ref()
    }

    fn go_to_child(&mut self, child: &TrieNodeInfo) -> LauTrieResult<Option<Node<TrieNodeInfo>>> {
        if self.current.is_none() {
            return Ok(None);
        }
        let node = self.provider.descendant(child)?;
        self.current = Some(node.clone());
        Ok(Some(node))
    }

    fn go_to_parent(&mut self) -> LauTrieResult<Option<Node<TrieNodeInfo>>> {
        let Some(current) = &self.current else {
            return Ok(None);
        };
        let parent = self.provider.predecessor(Some(&current.value))?;
        if let Some(node) = &parent {
            self.current = Some(node.clone());
        }
        Ok(parent)
    }
}
