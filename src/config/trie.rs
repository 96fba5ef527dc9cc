//! Trie loading configuration module.
//!
//! This module defines how input strings are turned into tagged entries when
//! a trie is bulk-loaded.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::{Tag, DEFAULT_AUTO_TAG_START};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrieConfig {
    /// Tag given to the first string of a bulk load; later strings count up
    pub auto_tag_start: Tag,

    /// Whether blank input lines are dropped before tagging
    ///
    /// When `false` a blank line still consumes a tag, so tags match line
    /// numbers.
    pub skip_blank_lines: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            auto_tag_start: DEFAULT_AUTO_TAG_START,
            skip_blank_lines: false,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.auto_tag_start < 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.auto_tag_start".to_string(),
                message: format!("must not be negative, got {}", self.auto_tag_start),
            });
        }

        Ok(())
    }
}
