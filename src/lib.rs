//! Lau Trie Library
//!
//! A compressed prefix tree that stores strings together with integer tags,
//! a generic tree-walking abstraction, and text printers built on top of it.
//! The library is used by the `lau_trie` binary but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::lau_trie`] owns the node arena and the insertion
//!   engine, and exposes nodes only as owned snapshots addressed by
//!   descriptor.
//! - [`data_structures::tree_walker`] defines the cursor trait and the
//!   depth-first and breadth-first traversals written against it.
//! - [`printer`] renders a trie through the walking interface.
//! - [`config`] and [`error`] carry the ambient configuration and error
//!   handling.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod printer;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::LauResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    config::init_default_config()?;

    Ok(())
}
