//! Generic tree walking.
//!
//! A [`TreeWalker`] is a cursor over any tree-shaped structure. It only has
//! to report the node under the cursor, move to a child and move to the
//! parent. Depth-first and breadth-first traversals are written once in
//! [`traversal`] against those three moves and are available to every
//! implementor through the default methods of the trait.
//!
//! # Example
//!
//! ```
//! use lau_trie_lib::data_structures::lau_trie::LauTrie;
//! use lau_trie_lib::data_structures::tree_walker::TreeWalker;
//!
//! let trie = LauTrie::from_strings(["car", "cat", "cow"]).unwrap();
//! let mut walker = trie.walker().unwrap();
//!
//! let mut seen = Vec::new();
//! walker
//!     .walk_row_order(|node| {
//!         seen.push(node.value.value().to_string());
//!         true
//!     }, true)
//!     .unwrap();
//!
//! assert_eq!(seen, ["", "c", "a", "ow", "r", "t"]);
//! ```

pub mod traversal;

pub use traversal::{walk_depth_first, walk_row_order};

/// A node handed out by a walker: its own payload plus the payloads of its
/// immediate children, in order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Node<T> {
    /// Payload of the node itself
    pub value: T,

    /// Payloads of the immediate children
    pub descendants: Vec<T>,
}

impl<T> Node<T> {
    /// Creates a node from its payload and its children's payloads.
    pub fn new(value: T, descendants: Vec<T>) -> Self {
        Self { value, descendants }
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.descendants.is_empty()
    }
}

/// Cursor over a tree.
///
/// Implementors provide the three primitive moves. Everything else is
/// derived from them.
pub trait TreeWalker {
    /// Payload carried by each node; also identifies a child to move to.
    type Item: Clone;

    /// Error raised when a move cannot be resolved.
    type Error;

    /// The node under the cursor, `None` when the tree is empty.
    fn current_node(&self) -> Option<&Node<Self::Item>>;

    /// Moves the cursor to the node identified by `child`.
    ///
    /// Returns `Ok(None)` and leaves the cursor where it was when there is no
    /// such node.
    fn go_to_child(&mut self, child: &Self::Item) -> Result<Option<Node<Self::Item>>, Self::Error>;

    /// Moves the cursor to the parent of the current node.
    ///
    /// Returns `Ok(None)` and leaves the cursor where it was at the root.
    fn go_to_parent(&mut self) -> Result<Option<Node<Self::Item>>, Self::Error>;

    /// Ascends until the cursor sits on the root.
    fn go_to_root(&mut self) -> Result<(), Self::Error> {
        if self.current_node().is_none() {
            return Ok(());
        }
        while self.go_to_parent()?.is_some() {}
        Ok(())
    }

    /// Visits the tree depth-first starting from the current node.
    ///
    /// For the tree
    ///
    /// ```text
    ///         1
    ///    /    |    \
    ///   2     3     4
    ///  /|\   /|\   /|\
    /// 5 6 7 8 9 0 1 2 3
    /// ```
    ///
    /// the visiting order is `1,2,5,6,7,3,8,9,0,4,1,2,3`. Stops as soon as
    /// `visit` returns `false`. With `return_to_root` the cursor is put back
    /// on the root afterwards, otherwise it stays wherever the traversal
    /// left it.
    fn walk_depth_first<F>(&mut self, visit: F, return_to_root: bool) -> Result<(), Self::Error>
    where
        F: FnMut(&Node<Self::Item>) -> bool,
        Self: Sized,
    {
        walk_depth_first(self, visit, return_to_root)
    }

    /// Visits the tree level by level starting from the current node.
    ///
    /// For the tree shown on [`TreeWalker::walk_depth_first`] the visiting
    /// order is `1,2,3,4,5,6,7,8,9,0,1,2,3`.
    fn walk_row_order<F>(&mut self, visit: F, return_to_root: bool) -> Result<(), Self::Error>
    where
        F: FnMut(&Node<Self::Item>) -> bool,
        Self: Sized,
    {
        walk_row_order(self, visit, return_to_root)
    }
}
