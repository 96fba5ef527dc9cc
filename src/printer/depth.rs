//! Depth-indented rendering.

use super::TriePrinter;
use crate::data_structures::lau_trie::LauTrie;

/// Indicator repeated once per level in front of every node.
pub const DEFAULT_DEPTH_INDICATOR: &str = ".";

/// Prints one node per line in depth-first order, indented by level.
///
/// ```text
/// (root)
/// .abcd [1]
/// ..e [2]
/// ..f [3]
/// ```
#[derive(Debug, Clone)]
pub struct DepthTriePrinter {
    indicator: String,
}

impl DepthTriePrinter {
    /// Creates a printer indenting with `indicator`.
    pub fn new<S: Into<String>>(indicator: S) -> Self {
        Self {
            indicator: indicator.into(),
        }
    }
}

impl Default for DepthTriePrinter {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_INDICATOR)
    }
}

impl TriePrinter for DepthTriePrinter {
    fn print(&self, trie: &LauTrie) -> String {
        let mut result = String::new();
        let walked = trie.walk_depth_first(|node| {
            result.push_str(&self.indicator.repeat(node.value.level()));
            result.push_str(&node.value.to_string());
            result.push('\n');
            true
        });
        if let Err(e) = walked {
            tracing::warn!(error = %e, "depth rendering stopped early");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_rendering() {
        let trie = LauTrie::from_strings(["abcd", "abcde", "abcdf", "st"]).unwrap();
        let expected = "(root)\n.abcd [1]\n..e [2]\n..f [3]\n.st [4]\n";
        assert_eq!(DepthTriePrinter::default().print(&trie), expected);
    }

    #[test]
    fn test_empty_trie_prints_root_only() {
        let trie = LauTrie::new();
        assert_eq!(DepthTriePrinter::new("  ").print(&trie), "(root)\n");
    }
}
