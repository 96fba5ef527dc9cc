//! Textual rendering of a [`LauTrie`].
//!
//! Printers are pure consumers of the walking interface: they obtain a fresh
//! walker from the trie and format the snapshots it hands out.

mod breadth;
mod depth;

pub use breadth::{BreadthTriePrinter, DEFAULT_LEVEL_SEPARATOR};
pub use depth::{DepthTriePrinter, DEFAULT_DEPTH_INDICATOR};

use crate::config::printer::{PrinterConfig, PrinterStyle};
use crate::data_structures::lau_trie::LauTrie;

/// Something that can render a trie as text.
#[cfg_attr(test, mockall::automock)]
pub trait TriePrinter {
    /// Renders `trie`.
    fn print(&self, trie: &LauTrie) -> String;
}

/// Builds the printer selected by `config`.
pub fn from_config(config: &PrinterConfig) -> Box<dyn TriePrinter> {
    match config.style {
        PrinterStyle::Depth => Box::new(DepthTriePrinter::new(config.depth_indicator.clone())),
        PrinterStyle::Breadth => Box::new(BreadthTriePrinter::new(config.level_separator.clone())),
    }
}
