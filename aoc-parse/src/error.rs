//! Error types for the parsing combinators

use thiserror::Error;

/// Result alias used by every parser in this crate
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors produced by parsers and combinator construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input matched no known token or pattern
    #[error("Failed to parse '{0}'")]
    UnknownToken(String),

    /// Input did not split into the expected number of fields
    #[error("Expected {expected} fields in '{input}', found {found}")]
    Arity {
        expected: usize,
        found: usize,
        input: String,
    },

    /// Input is not a valid integer
    #[error("Invalid integer '{0}'")]
    Int(String),

    /// A line did not match a sentence template
    #[error("'{input}' does not match template '{template}'")]
    TemplateMismatch { template: String, input: String },

    /// A sentence template could not be compiled
    #[error("Invalid template '{template}': {reason}")]
    BadTemplate { template: String, reason: String },

    /// A switch case pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    BadPattern { pattern: String, reason: String },

    /// A sentence field was requested that the template does not define
    #[error("No field named '{0}'")]
    MissingField(String),

    /// A sentence field was requested with the wrong type
    #[error("Field '{0}' has the wrong type")]
    FieldType(String),
}
