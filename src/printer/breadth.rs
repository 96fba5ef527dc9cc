//! Level-grouped rendering.

use std::fmt::Write;

use super::TriePrinter;
use crate::data_structures::lau_trie::LauTrie;

/// Separator placed between nodes of one level.
pub const DEFAULT_LEVEL_SEPARATOR: &str = " | ";

/// Prints one line per level, nodes in breadth-first order.
///
/// ```text
/// 0: (root)
/// 1: abcd [1] | st [4]
/// 2: e [2] | f [3]
/// ```
#[derive(Debug, Clone)]
pub struct BreadthTriePrinter {
    separator: String,
}

impl BreadthTriePrinter {
    /// Creates a printer joining nodes of a level with `separator`.
    pub fn new<S: Into<String>>(separator: S) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for BreadthTriePrinter {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_SEPARATOR)
    }
}

impl TriePrinter for BreadthTriePrinter {
    fn print(&self, trie: &LauTrie) -> String {
        let mut levels: Vec<Vec<String>> = Vec::new();
        let walked = trie.walk_row_order(|node| {
            let level = node.value.level();
            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(node.value.to_string());
            true
        });
        if let Err(e) = walked {
            tracing::warn!(error = %e, "breadth rendering stopped early");
        }

        let mut result = String::new();
        for (level, nodes) in levels.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(result, "{level}: {}", nodes.join(&self.separator));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadth_rendering() {
        let trie = LauTrie::from_strings(["abcd", "abcde", "abcdf", "st", "sf"]).unwrap();
        let expected = "0: (root)\n1: abcd [1] | s\n2: e [2] | f [3] | t [4] | f [5]\n";
        assert_eq!(BreadthTriePrinter::default().print(&trie), expected);
        assert_eq!(trie.to_string(), expected);
    }

    #[test]
    fn test_custom_separator() {
        let trie = LauTrie::from_strings(["x", "y"]).unwrap();
        assert_eq!(BreadthTriePrinter::new(", ").print(&trie), "0: (root)\n1: x [1], y [2]\n");
    }
}
