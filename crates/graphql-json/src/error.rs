//! Error types for JSON scalar coercion and literal text handling.

use thiserror::Error;

/// Errors that can occur while coercing or reading JSON scalar literals.
#[derive(Error, Debug)]
pub enum JsonScalarError {
    /// The literal node is of a kind JSON cannot represent (enum value,
    /// variable reference, ...). Carries the kind name, e.g. `EnumValue`.
    #[error("Invalid literal kind: {kind} is not representable as JSON")]
    InvalidLiteralKind { kind: String },

    /// A numeric literal that does not denote a finite number.
    #[error("Invalid number literal: {literal}")]
    InvalidNumber { literal: String },

    /// The literal text was not valid GraphQL value syntax.
    /// Line and column are 1-based.
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// An object key that cannot be written as a GraphQL name.
    #[error("Invalid name: {name:?} cannot be used as an object field name")]
    InvalidName { name: String },
}

impl JsonScalarError {
    pub(crate) fn invalid_kind(kind: impl Into<String>) -> Self {
        JsonScalarError::InvalidLiteralKind { kind: kind.into() }
    }
}

/// Convenience alias used throughout graphql-json.
pub type Result<T> = std::result::Result<T, JsonScalarError>;
