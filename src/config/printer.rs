//! Printer configuration module.
//!
//! This module selects how a trie is rendered as text.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::printer::{DEFAULT_DEPTH_INDICATOR, DEFAULT_LEVEL_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Rendering style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrinterStyle {
    /// One node per line, depth-first, indented by level
    Depth,
    /// One line per level
    #[default]
    Breadth,
}

/// Printer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrinterConfig {
    /// Rendering style
    pub style: PrinterStyle,

    /// Indentation repeated once per level by the depth printer
    pub depth_indicator: String,

    /// Separator between nodes of one level in the breadth printer
    pub level_separator: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            style: PrinterStyle::default(),
            depth_indicator: DEFAULT_DEPTH_INDICATOR.to_string(),
            level_separator: DEFAULT_LEVEL_SEPARATOR.to_string(),
        }
    }
}

impl Validate for PrinterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.depth_indicator.is_empty() {
            return Err(ConfigError::ValidationError(
                "depth_indicator cannot be empty".to_string(),
            ));
        }

        if self.level_separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "level_separator cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
