//! Lau Trie Implementation
//!
//! A compressed prefix tree storing strings together with integer tags.
//! Shared prefixes are merged into a single node and nodes are split
//! ("forked") when an insertion diverges in the middle of an edge.
//!
//! Internally the trie is an arena of nodes linked by index. Externally it
//! is only visible through owned snapshots ([`TrieNodeInfo`]) addressed by
//! descriptors, plus a [`LauTrieWalker`] implementing the generic
//! [`TreeWalker`](crate::data_structures::tree_walker::TreeWalker) cursor.
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! trie.insert("abcd", 1).unwrap();
//! trie.insert("abcde", 2).unwrap();
//! trie.insert("abcdf", 3).unwrap();
//!
//! assert_eq!(trie.node_count(), 4);
//! assert_eq!(trie.find_by_prefix("abcd").len(), 3);
//! assert!(trie.contains("abcde"));
//! assert!(!trie.contains("abc"));
//! ```

mod descriptor;
mod error;
mod info;
mod insert;
mod node;
mod query;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

pub use error::LauTrieError;
pub use info::{LauTrieWalker, NodeInfoProvider, TrieNodeInfo};
use node::{TrieNode, ROOT};

use crate::data_structures::tree_walker::{Node, TreeWalker};
use crate::printer::{BreadthTriePrinter, TriePrinter};

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;

/// Integer tag attached to a stored string.
pub type Tag = i64;

/// First tag handed out by [`LauTrie::from_strings`].
pub const DEFAULT_AUTO_TAG_START: Tag = 1;

/// Pairs every item with consecutive tags starting at `start`.
///
/// # Errors
///
/// [`LauTrieError::TagOverflow`] when more items follow the one tagged
/// [`Tag::MAX`].
pub fn tag_sequentially<I, S>(items: I, start: Tag) -> LauTrieResult<Vec<(S, Tag)>>
where
    I: IntoIterator<Item = S>,
{
    let mut next = Some(start);
    let mut tagged = Vec::new();
    for item in items {
        let tag = next.ok_or(LauTrieError::TagOverflow {
            start,
            assigned: tagged.len(),
        })?;
        tagged.push((item, tag));
        next = tag.checked_add(1);
    }
    Ok(tagged)
}

/// Compressed prefix tree with tagged strings.
///
/// Key features:
/// * Shared prefixes stored once, nodes forked on divergence
/// * Several tags per string, several strings per tag are not checked
/// * Descriptor addressing that reports stale snapshots explicitly
/// * Depth-first and breadth-first walking through [`LauTrieWalker`]
#[derive(Clone)]
pub struct LauTrie {
    /// Node arena, the root lives at index 0
    nodes: Vec<TrieNode>,

    /// Printer used by the `Display` implementation
    printer: Option<Arc<dyn TriePrinter>>,
}

impl LauTrie {
    /// Creates an empty trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            printer: Some(Arc::new(BreadthTriePrinter::default())),
        }
    }

    /// Builds a trie from strings tagged `1..=N` in sequence order.
    ///
    /// Empty strings consume a tag without inserting anything, so tags keep
    /// matching positions (for example line numbers).
    pub fn from_strings<I, S>(strings: I) -> LauTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_strings_starting_at(strings, DEFAULT_AUTO_TAG_START)
    }

    /// Builds a trie from strings tagged consecutively starting at `start`.
    ///
    /// # Errors
    ///
    /// [`LauTrieError::TagOverflow`] when the tags would run past
    /// [`Tag::MAX`]. Nothing is inserted in that case.
    pub fn from_strings_starting_at<I, S>(strings: I, start: Tag) -> LauTrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tagged(tag_sequentially(strings, start)?)
    }

    /// Builds a trie from `(string, tag)` pairs.
    pub fn from_tagged<I, S>(pairs: I) -> LauTrieResult<Self>
    where
        I: IntoIterator<Item = (S, Tag)>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        let mut count = 0usize;
        for (key, tag) in pairs {
            trie.insert(key, tag)?;
            count += 1;
        }
        tracing::debug!(inserted = count, nodes = trie.node_count(), "bulk load complete");
        Ok(trie)
    }

    /// Returns a fresh walker positioned on the root.
    pub fn walker(&self) -> LauTrieResult<LauTrieWalker<'_>> {
        LauTrieWalker::new(self)
    }

    /// Snapshot of the node addressed by `descriptor`.
    ///
    /// # Errors
    ///
    /// [`LauTrieError::StaleDescriptor`] when nothing is addressed.
    pub fn node_info(&self, descriptor: &str) -> LauTrieResult<Node<TrieNodeInfo>> {
        let id = self.resolve_or_stale(descriptor)?;
        self.public_node(id)
    }

    /// Depth-first walk from the root with a fresh walker.
    pub fn walk_depth_first<F>(&self, visit: F) -> LauTrieResult<()>
    where
        F: FnMut(&Node<TrieNodeInfo>) -> bool,
    {
        self.walker()?.walk_depth_first(visit, true)
    }

    /// Breadth-first walk from the root with a fresh walker.
    pub fn walk_row_order<F>(&self, visit: F) -> LauTrieResult<()>
    where
        F: FnMut(&Node<TrieNodeInfo>) -> bool,
    {
        self.walker()?.walk_row_order(visit, true)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing besides the root is stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Tags stored for exactly `key`.
    ///
    /// Returns `None` when `key` is not stored.
    pub fn tags_of<K>(&self, key: K) -> Option<BTreeSet<Tag>>
    where
        K: AsRef<str>,
    {
        let key: Vec<char> = key.as_ref().chars().collect();
        if key.is_empty() {
            return None;
        }
        let node = self.nodes.get(self.exact_node(&key)?.0)?;
        (!node.tags.is_empty()).then(|| node.tags.clone())
    }

    /// Whether `key` was inserted.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.tags_of(key).is_some()
    }

    /// Every stored string starting with `prefix`, keyed by tag.
    ///
    /// An empty prefix matches everything.
    pub fn find_by_prefix<P>(&self, prefix: P) -> BTreeMap<Tag, String>
    where
        P: AsRef<str>,
    {
        let prefix: Vec<char> = prefix.as_ref().chars().collect();
        let Some((start, spelled)) = self.prefix_node(&prefix) else {
            return BTreeMap::new();
        };
        self.collect_keys(start, spelled)
            .into_iter()
            .flat_map(|(tags, key)| tags.into_iter().map(move |tag| (tag, key.clone())))
            .collect()
    }

    /// Every stored string keyed by tag.
    pub fn reconstruct(&self) -> BTreeMap<Tag, String> {
        self.find_by_prefix("")
    }

    /// Checks the structural invariants of the node graph.
    ///
    /// Verifies that sibling values start with distinct characters, levels
    /// grow by one per edge, the root is empty and untagged, non-root values
    /// are non-empty and parent/child links agree.
    pub fn verify_invariants(&self) -> LauTrieResult<()> {
        let root = self.node(ROOT)?;
        if !root.value.is_empty() || !root.tags.is_empty() || root.level != 0 || root.parent.is_some() {
            return Err(LauTrieError::InvariantViolation(
                "root must be empty, untagged, parentless and at level 0".to_string(),
            ));
        }

        let mut reachable = 1usize;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            let mut firsts = BTreeSet::new();
            for &child_id in &node.children {
                let child = self.node(child_id)?;
                let first = child.first_char().ok_or_else(|| {
                    LauTrieError::InvariantViolation(format!("node {} has an empty value", child_id.0))
                })?;
                if !firsts.insert(first) {
                    return Err(LauTrieError::InvariantViolation(format!(
                        "node {} has two children starting with '{first}'",
                        id.0
                    )));
                }
                if child.parent != Some(id) {
                    return Err(LauTrieError::InvariantViolation(format!(
                        "node {} does not point back to its parent {}",
                        child_id.0, id.0
                    )));
                }
                if child.level != node.level + 1 {
                    return Err(LauTrieError::InvariantViolation(format!(
                        "node {} sits at level {} below a node at level {}",
                        child_id.0, child.level, node.level
                    )));
                }
                reachable += 1;
                stack.push(child_id);
            }
        }

        if reachable != self.nodes.len() {
            return Err(LauTrieError::InvariantViolation(format!(
                "{} of {} nodes are reachable from the root",
                reachable,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    /// Replaces the printer used by `Display`.
    pub fn set_printer<P>(&mut self, printer: P)
    where
        P: TriePrinter + 'static,
    {
        self.printer = Some(Arc::new(printer));
    }

    /// Removes the printer; `Display` then prints a one-line summary.
    pub fn clear_printer(&mut self) {
        self.printer = None;
    }

    /// Renders the trie with `printer`.
    pub fn render_with<P>(&self, printer: &P) -> String
    where
        P: TriePrinter + ?Sized,
    {
        printer.print(self)
    }
}

impl Default for LauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LauTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauTrie")
            .field("nodes", &self.nodes)
            .field("has_printer", &self.printer.is_some())
            .finish()
    }
}

impl Display for LauTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.printer {
            Some(printer) => f.write_str(&printer.print(self)),
            None => write!(f, "LauTrie({} nodes)", self.node_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LauTrie::new();
        assert!(trie.is_empty());

        trie.insert("hello", 1).unwrap();
        trie.insert("help", 2).unwrap();
        trie.insert("hello", 3).unwrap();
        assert!(!trie.is_empty());

        assert_eq!(trie.tags_of("hello"), Some(BTreeSet::from([1, 3])));
        assert_eq!(trie.tags_of("help"), Some(BTreeSet::from([2])));
        assert_eq!(trie.tags_of("hel"), None);
        assert_eq!(trie.tags_of("he"), None);
        assert_eq!(trie.tags_of(""), None);
        assert!(!trie.contains("helpful"));
        trie.verify_invariants().unwrap();
    }

    #[test]
    fn test_trie_prefix_search() {
        let trie = LauTrie::from_strings(["apple", "application", "apply", "banana"]).unwrap();

        let results = trie.find_by_prefix("app");
        assert_eq!(
            results,
            BTreeMap::from([
                (1, "apple".to_string()),
                (2, "application".to_string()),
                (3, "apply".to_string()),
            ])
        );

        // Prefix ending inside an edge.
        assert_eq!(trie.find_by_prefix("ban").len(), 1);
        assert!(trie.find_by_prefix("orange").is_empty());
        assert!(trie.find_by_prefix("apples").is_empty());
        assert_eq!(trie.reconstruct().len(), 4);
    }

    #[test]
    fn test_bulk_constructors() {
        let trie = LauTrie::from_strings(["a", "", "b"]).unwrap();
        assert_eq!(
            trie.reconstruct(),
            BTreeMap::from([(1, "a".to_string()), (3, "b".to_string())])
        );

        let trie = LauTrie::from_strings_starting_at(["x", "y"], 10).unwrap();
        assert_eq!(trie.tags_of("y"), Some(BTreeSet::from([11])));

        let trie = LauTrie::from_strings_starting_at(["x", "y"], Tag::MAX - 1).unwrap();
        assert_eq!(trie.tags_of("y"), Some(BTreeSet::from([Tag::MAX])));

        let trie = LauTrie::from_tagged([("one", 100), ("two", 7)]).unwrap();
        assert_eq!(trie.tags_of("one"), Some(BTreeSet::from([100])));
        assert_eq!(trie.tags_of("two"), Some(BTreeSet::from([7])));
    }

    #[test]
    fn test_tag_sequence_overflow_is_an_error() {
        assert_eq!(
            LauTrie::from_strings_starting_at(["a", "b"], Tag::MAX).unwrap_err(),
            LauTrieError::TagOverflow {
                start: Tag::MAX,
                assigned: 1
            }
        );
        assert_eq!(
            tag_sequentially(["a"], Tag::MAX).unwrap(),
            vec![("a", Tag::MAX)]
        );
        assert!(tag_sequentially(Vec::<&str>::new(), Tag::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_node_info_lookup() {
        let trie = LauTrie::from_strings(["abcd", "abcde", "abcdf"]).unwrap();
        let node = trie.node_info("a").unwrap();
        assert_eq!(node.value.value(), "abcd");
        assert_eq!(node.value.level(), 1);
        let children: Vec<&str> = node.descendants.iter().map(TrieNodeInfo::value).collect();
        assert_eq!(children, ["e", "f"]);

        assert_eq!(
            trie.node_info("b").unwrap_err(),
            LauTrieError::StaleDescriptor {
                descriptor: "b".to_string()
            }
        );
    }

    #[test]
    fn test_verify_invariants_detects_corruption() {
        let mut trie = LauTrie::from_strings(["ab", "ac"]).unwrap();
        trie.verify_invariants().unwrap();

        trie.nodes[2].level = 7;
        assert!(matches!(
            trie.verify_invariants(),
            Err(LauTrieError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_display_without_printer() {
        let mut trie = LauTrie::from_strings(["ab"]).unwrap();
        trie.clear_printer();
        assert_eq!(trie.to_string(), "LauTrie(2 nodes)");
    }
}
