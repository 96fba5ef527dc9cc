//! Read-only lookups by key and by prefix.

use std::collections::BTreeSet;

use super::node::{NodeId, ROOT};
use super::{LauTrie, Tag};

impl LauTrie {
    /// Node on which `key` ends exactly, if any.
    pub(crate) fn exact_node(&self, key: &[char]) -> Option<NodeId> {
        let mut current = ROOT;
        let mut i = 0;
        while i < key.len() {
            current = self.child_starting_with(current, key[i])?;
            let value = &self.nodes.get(current.0)?.value;
            if key.len() - i < value.len() || key[i..i + value.len()] != value[..] {
                return None;
            }
            i += value.len();
        }
        Some(current)
    }

    /// Topmost node whose subtree holds every key starting with `prefix`,
    /// with the full string spelled out by the path to it.
    pub(crate) fn prefix_node(&self, prefix: &[char]) -> Option<(NodeId, String)> {
        let mut current = ROOT;
        let mut spelled: Vec<char> = Vec::with_capacity(prefix.len());
        let mut i = 0;
        while i < prefix.len() {
            current = self.child_starting_with(current, prefix[i])?;
            let value = &self.nodes.get(current.0)?.value;
            let overlap = value.len().min(prefix.len() - i);
            if value[..overlap] != prefix[i..i + overlap] {
                return None;
            }
            spelled.extend_from_slice(value);
            i += overlap;
        }
        Some((current, spelled.into_iter().collect()))
    }

    /// Tag sets and reconstructed keys of every tagged node below `start`,
    /// in depth-first order.
    pub(crate) fn collect_keys(&self, start: NodeId, spelled: String) -> Vec<(BTreeSet<Tag>, String)> {
        let mut result = Vec::new();
        let mut stack = vec![(start, spelled)];
        while let Some((id, key)) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            if !node.tags.is_empty() {
                result.push((node.tags.clone(), key.clone()));
            }
            for child in node.children.iter().rev() {
                if let Some(child_node) = self.nodes.get(child.0) {
                    let mut child_key = key.clone();
                    child_key.extend(child_node.value.iter());
                    stack.push((*child, child_key));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_prefix_node_inside_edge() {
        let trie = LauTrie::from_strings(["abcd", "abce"]).unwrap();
        let (id, spelled) = trie.prefix_node(&chars("ab")).unwrap();
        assert_eq!(spelled, "abc");
        assert_eq!(trie.node(id).unwrap().value_string(), "abc");
        assert!(trie.prefix_node(&chars("ax")).is_none());
        assert_eq!(trie.prefix_node(&[]), Some((ROOT, String::new())));
    }

    #[test]
    fn test_exact_node_requires_full_edge() {
        let trie = LauTrie::from_strings(["abcd", "abce"]).unwrap();
        assert!(trie.exact_node(&chars("ab")).is_none());
        assert!(trie.exact_node(&chars("abc")).is_some());
        assert!(trie.exact_node(&chars("abcdx")).is_none());
    }

    #[test]
    fn test_collect_keys_depth_first() {
        let trie = LauTrie::from_strings(["b", "ab", "a", "ac"]).unwrap();
        let keys: Vec<String> = trie
            .collect_keys(ROOT, String::new())
            .into_iter()
            .map(|(_, key)| key)
            .collect();
        assert_eq!(keys, ["b", "a", "ab", "ac"]);
    }
}
