//! Error types for the conditional pipe crates.
//!
//! The composer itself never produces an error: a pipe either answers or its
//! fault propagates to the caller untouched. These errors cover the code
//! around it, such as turning configuration into subjects.

use thiserror::Error;

/// Root error type for the conditional pipe crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named value (status, role, permission flag) is not recognised
    #[error("Unknown {kind}: '{value}'")]
    Parse {
        /// What was being parsed, e.g. "user status"
        kind: &'static str,

        /// The offending input
        value: String,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build a parse error for the given kind and input.
    pub fn parse(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
