//! Error types for tankard.

use derive_more::{Display, Error, From};

/// Main error type for tankard operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The value handed to the encoder was not a record.
    #[display("invalid input: expected a record, got {kind}")]
    #[from(skip)]
    InvalidInput {
        /// Kind of value that was actually received (e.g., "array").
        kind: String,
    },

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_urlencoded::ser::Error),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-input error naming the offending kind.
    #[must_use]
    pub fn invalid_input(kind: impl Into<String>) -> Self {
        Self::InvalidInput { kind: kind.into() }
    }

    /// Returns `true` if this is an invalid-input error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::invalid_input("array");
        assert_eq!(err.to_string(), "invalid input: expected a record, got array");
    }

    #[test]
    fn error_is_invalid_input() {
        assert!(Error::invalid_input("string").is_invalid_input());
    }
}
