//! Defines [`WktError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WktError {
    /// A token was routed to a geometry that already closed its last parenthesis.
    #[error("Geometry is already finished and cannot accept more tokens")]
    Finished,

    /// The token stream ended before the root geometry closed all of its parentheses.
    #[error("Incomplete geometry: {open} opening and {close} closing parentheses")]
    Incomplete { open: usize, close: usize },

    /// A token followed a finished root geometry.
    #[error("Unexpected token after end of geometry: {0}")]
    TrailingToken(String),

    /// Strict parsing found a keyword that the type registry does not know.
    #[error("Unknown geometry type: {0}")]
    UnknownType(String),

    /// A finished geometry was required.
    #[error("Geometry is not finished")]
    NotFinished,

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, WktError>;
