//! Error types for the ggdxf library

use std::io;
use thiserror::Error;

/// Main error type for DXF reading
///
/// Every grammar violation is fatal to the read that produced it: the
/// first malformed token aborts the parse and no partial document is
/// returned.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while opening or reading the input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input ended while another token was required
    #[error("Unexpected end of input while reading {context}")]
    UnexpectedEndOfInput {
        /// Construct that was being parsed
        context: String,
    },

    /// A literal-match assertion failed
    #[error("Unexpected token at line {line}: expected '{expected}', found '{found}'")]
    UnexpectedToken {
        /// Token the grammar required
        expected: String,
        /// Token actually read
        found: String,
        /// Physical line of the offending token
        line: usize,
    },

    /// An entity tag other than POINT or POLYLINE
    #[error("Unsupported entity type '{tag}' at line {line}")]
    UnsupportedEntityType {
        /// The entity type tag
        tag: String,
        /// Physical line of the tag
        line: usize,
    },

    /// A token that should hold an integer or float did not
    #[error("Malformed number '{value}' for {context} at line {line}")]
    MalformedNumber {
        /// Raw token text
        value: String,
        /// What the number was meant to be
        context: String,
        /// Physical line of the token
        line: usize,
    },
}

impl DxfError {
    /// Shorthand for [`DxfError::UnexpectedToken`]
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        DxfError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Check whether the error comes from the DXF grammar rather than IO
    pub fn is_grammar_error(&self) -> bool {
        !matches!(self, DxfError::Io(_))
    }
}

/// Result type alias for ggdxf operations
pub type Result<T> = std::result::Result<T, DxfError>;
