//! Data structures.
//!
//! - [`lau_trie`]: compressed prefix tree with tagged strings
//! - [`tree_walker`]: cursor abstraction and traversals over any tree

pub mod lau_trie;
pub mod tree_walker;

// Re-export common data structures
pub use lau_trie::{LauTrie, LauTrieError, LauTrieResult, LauTrieWalker, Tag, TrieNodeInfo};
pub use tree_walker::{Node, TreeWalker};
