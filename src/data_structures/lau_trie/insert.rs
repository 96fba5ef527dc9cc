//! Insertion engine.
//!
//! Walks the arena character by character against the input and ends in one
//! of three ways: the tag is added to an existing node, a new branch is
//! attached, or the node where the walk diverged is forked.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::node::{NodeId, TrieNode, ROOT};
use super::{LauTrie, LauTrieResult, Tag};

impl LauTrie {
    /// Inserts `key` tagged with `tag`.
    ///
    /// Empty keys are ignored. Inserting a pair that is already present
    /// leaves the trie unchanged. Tags are not checked for uniqueness across
    /// different keys.
    ///
    /// # Errors
    ///
    /// Returns an error when the node graph turns out to be inconsistent.
    /// Every check runs before the graph is touched, so a failed insertion
    /// leaves the trie as it was.
    pub fn insert<K>(&mut self, key: K, tag: Tag) -> LauTrieResult<()>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            trace!(tag, "ignoring empty key");
            return Ok(());
        }

        let input: Vec<char> = key.chars().collect();
        let mut i = 0;
        let mut j = 0;
        let mut current = ROOT;

        loop {
            let node = self.node(current)?;
            if j >= node.value.len() {
                if i >= input.len() {
                    trace!(key, tag, "key already represented, adding tag");
                    self.node_mut(current)?.tags.insert(tag);
                    return Ok(());
                }
                match self.child_starting_with(current, input[i]) {
                    Some(child) => {
                        current = child;
                        j = 0;
                    }
                    None => return self.attach_branch(current, input[i..].to_vec(), tag),
                }
            } else {
                if i >= input.len() || input[i] != node.value[j] {
                    return self.fork(current, &input, i, j, tag);
                }
                i += 1;
                j += 1;
            }
        }
    }

    /// Appends a new leaf holding the rest of the input under `parent`.
    fn attach_branch(&mut self, parent: NodeId, remainder: Vec<char>, tag: Tag) -> LauTrieResult<()> {
        let level = self.node(parent)?.level;
        let mut leaf = TrieNode::child_of(parent, level, remainder);
        leaf.tags.insert(tag);
        trace!(value = %leaf.value_string(), level = leaf.level, tag, "attaching new branch");

        let id = self.push_node(leaf);
        self.node_mut(parent)?.children.push(id);
        Ok(())
    }

    /// Splits `target` at `split` (the number of matched value characters).
    ///
    /// The target keeps the matched prefix. Its old suffix, children and
    /// tags move into a value-remainder child. When input is left over it
    /// becomes a second child carrying `tag`, otherwise the target itself
    /// receives `tag`.
    fn fork(
        &mut self,
        target: NodeId,
        input: &[char],
        consumed: usize,
        split: usize,
        tag: Tag,
    ) -> LauTrieResult<()> {
        // Build both remainders detached; nothing below can fail.
        let node = self.node(target)?;
        let value_tail = node.value_tail(split)?;
        let level = node.level;
        let value_remainder = TrieNode::child_of(target, level, value_tail);
        let string_remainder = input.get(consumed..).filter(|rest| !rest.is_empty()).map(|rest| {
            let mut leaf = TrieNode::child_of(target, level, rest.to_vec());
            leaf.tags.insert(tag);
            leaf
        });
        debug!(
            prefix = %node.value[..split].iter().collect::<String>(),
            value_remainder = %value_remainder.value_string(),
            string_remainder = ?string_remainder.as_ref().map(TrieNode::value_string),
            tag,
            "forking node"
        );

        let remainder_id = self.push_node(value_remainder);
        let string_id = string_remainder.map(|leaf| self.push_node(leaf));

        let node = &mut self.nodes[target.0];
        node.value.truncate(split);
        let moved_children = std::mem::replace(&mut node.children, vec![remainder_id]);
        let moved_tags = std::mem::take(&mut node.tags);
        match string_id {
            Some(id) => node.children.push(id),
            None => {
                node.tags.insert(tag);
            }
        }

        for child in &moved_children {
            self.nodes[child.0].parent = Some(remainder_id);
        }
        let remainder = &mut self.nodes[remainder_id.0];
        remainder.children = moved_children;
        remainder.tags = moved_tags;

        self.relevel(remainder_id);
        Ok(())
    }

    /// Recomputes levels of the subtree rooted at `start` from its parent.
    fn relevel(&mut self, start: NodeId) {
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let level = match self.nodes[id.0].parent {
                Some(parent) => self.nodes[parent.0].level + 1,
                None => 0,
            };
            let node = &mut self.nodes[id.0];
            node.level = level;
            queue.extend(node.children.iter().copied());
        }
    }

    fn push_node(&mut self, node: TrieNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
