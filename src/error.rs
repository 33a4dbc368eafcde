//! Errors raised by locale validation and the literal JSON contract.

use thiserror::Error;

/// Errors that may occur while building, deriving or (de)serializing a literal
#[derive(Error, Debug)]
pub enum LiteralError {
    /// A caller-supplied locale is not part of the supported locale set
    #[error("{0} is not a valid locale.")]
    InvalidLocale(String),

    /// The input is not JSON, or not shaped as a literal object
    #[error("Malformed literal JSON: {0}")]
    MalformedInput(String),

    /// The JSON encoder failed
    #[error("Failed to serialize literal: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl LiteralError {
    pub(crate) fn invalid_locale(locale: impl Into<String>) -> Self {
        Self::InvalidLocale(locale.into())
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}
