//! Test modules for Lau Trie.
//!
//! This module contains the crate-level testing infrastructure:
//! - Scenario tests for insertion and forking
//! - Walker tests for both traversal orders
//! - Property-based tests using proptest
//! - Configuration and error handling tests
//! - Test fixtures and utilities


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    bfs_values, create_test_dir, dfs_values, word_list_strategy, word_strategy, TestFixture,
};
