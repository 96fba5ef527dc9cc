//! Descriptor addressing.
//!
//! A descriptor is the string of first characters along the path from the
//! root (excluded) to a node. Sibling values never share a first character,
//! so one character per level is enough to pick a child.

use super::node::{NodeId, TrieNode, ROOT};
use super::{LauTrie, LauTrieError, LauTrieResult};

impl LauTrie {
    /// Looks up a node by arena index.
    pub(crate) fn node(&self, id: NodeId) -> LauTrieResult<&TrieNode> {
        self.nodes.get(id.0).ok_or_else(|| {
            LauTrieError::InvariantViolation(format!("dangling node index {}", id.0))
        })
    }

    /// Mutable counterpart of [`LauTrie::node`].
    pub(crate) fn node_mut(&mut self, id: NodeId) -> LauTrieResult<&mut TrieNode> {
        self.nodes.get_mut(id.0).ok_or_else(|| {
            LauTrieError::InvariantViolation(format!("dangling node index {}", id.0))
        })
    }

    /// Finds the child of `parent` whose value starts with `first`.
    pub(crate) fn child_starting_with(&self, parent: NodeId, first: char) -> Option<NodeId> {
        let node = self.nodes.get(parent.0)?;
        node.children.iter().copied().find(|child| {
            self.nodes
                .get(child.0)
                .and_then(TrieNode::first_char)
                .is_some_and(|c| c == first)
        })
    }

    /// Resolves a descriptor to a node, `None` when it addresses nothing.
    pub(crate) fn resolve_descriptor(&self, descriptor: &str) -> Option<NodeId> {
        descriptor
            .chars()
            .try_fold(ROOT, |node, c| self.child_starting_with(node, c))
    }

    /// Resolves a descriptor or reports it as stale.
    pub(crate) fn resolve_or_stale(&self, descriptor: &str) -> LauTrieResult<NodeId> {
        self.resolve_descriptor(descriptor).ok_or_else(|| {
            tracing::warn!(descriptor, "descriptor does not resolve to any node");
            LauTrieError::StaleDescriptor {
                descriptor: descriptor.to_string(),
            }
        })
    }

    /// Builds the descriptor of a node by following parent links.
    pub(crate) fn descriptor_of(&self, id: NodeId) -> LauTrieResult<String> {
        let mut reversed = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current)?;
            if current != ROOT {
                let first = node.first_char().ok_or_else(|| {
                    LauTrieError::InvariantViolation(format!(
                        "non-root node {} has an empty value",
                        current.0
                    ))
                })?;
                reversed.push(first);
            }
            cursor = node.parent;
        }
        Ok(reversed.into_iter().rev().collect())
    }
}
