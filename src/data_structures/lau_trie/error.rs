//! Error types for the Lau Trie.
//!
//! This module defines the error types that can occur during Lau Trie operations.

/// Errors that can occur in Lau Trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LauTrieError {
    /// A descriptor no longer addresses the node it was captured from.
    /// Either the trie was restructured after the snapshot was taken or the
    /// descriptor was never valid.
    #[error("Can't find node with descriptor: '{descriptor}', maybe you have outdated node data?")]
    StaleDescriptor {
        /// The descriptor that failed to resolve.
        descriptor: String,
    },

    /// A slice of a node value was requested past its recorded length.
    #[error("Range {start}..{start}+{count} is out of bounds for a value of length {len}")]
    OutOfRange {
        /// First requested position.
        start: usize,
        /// Number of requested characters.
        count: usize,
        /// Length of the value.
        len: usize,
    },

    /// Consecutive tags starting at `start` ran past the largest tag.
    #[error("Tag sequence starting at {start} overflows after {assigned} strings")]
    TagOverflow {
        /// First tag of the sequence.
        start: i64,
        /// Number of strings tagged before the overflow.
        assigned: usize,
    },

    /// The node graph is inconsistent.
    #[error("Trie invariant violated: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LauTrieError::StaleDescriptor {
            descriptor: "ac".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Can't find node with descriptor: 'ac', maybe you have outdated node data?"
        );

        let err = LauTrieError::OutOfRange {
            start: 3,
            count: 2,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "Range 3..3+2 is out of bounds for a value of length 4"
        );

        let err = LauTrieError::TagOverflow {
            start: i64::MAX,
            assigned: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("Tag sequence starting at {} overflows after 1 strings", i64::MAX)
        );

        let err = LauTrieError::InvariantViolation("dangling node".to_string());
        assert_eq!(err.to_string(), "Trie invariant violated: dangling node");
    }
}
