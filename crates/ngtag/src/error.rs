//! Error types for attribute resolution.

use thiserror::Error;

use crate::key::AttributeKey;

/// Errors raised while resolving a declared attribute set.
///
/// Every variant is a caller-input error: rendering is deterministic, so
/// retrying with the same attributes produces the same error. No markup is
/// returned when any of these occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// An enumerated attribute was declared with a value outside its set.
    #[error("unrecognized value '{value}' for '{key}'")]
    UnrecognizedEnumValue { key: AttributeKey, value: String },

    /// A list attribute contains a token that is not an integer.
    #[error("malformed list '{value}' for '{key}': '{token}' is not an integer")]
    MalformedListValue {
        key: AttributeKey,
        value: String,
        token: String,
    },

    /// A boolean attribute was declared as text other than `true`/`false`.
    #[error("invalid boolean '{value}' for '{key}'")]
    InvalidBoolean { key: AttributeKey, value: String },

    /// The declared value has a type the attribute cannot take.
    #[error(
        "type mismatch for '{key}': expected {expected}, got {actual}{}",
        quote_hint(.actual)
    )]
    TypeMismatch {
        key: AttributeKey,
        expected: &'static str,
        actual: &'static str,
    },

    /// A declared identifier cannot be used as a local reference name.
    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),

    /// An attribute document failed to deserialize.
    #[error("failed to parse attributes: {0}")]
    Parse(String),
}

impl TagError {
    /// Create an unrecognized enum value error.
    pub fn unrecognized(key: AttributeKey, value: impl Into<String>) -> Self {
        Self::UnrecognizedEnumValue {
            key,
            value: value.into(),
        }
    }

    /// Create a malformed list error.
    pub fn malformed_list(
        key: AttributeKey,
        value: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::MalformedListValue {
            key,
            value: value.into(),
            token: token.into(),
        }
    }
}

fn quote_hint(actual: &str) -> &'static str {
    if actual == "number" {
        " (quote the value to keep it as written)"
    } else {
        ""
    }
}

impl From<serde_json::Error> for TagError {
    fn from(err: serde_json::Error) -> Self {
        TagError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for TagError {
    fn from(err: serde_yaml::Error) -> Self {
        TagError::Parse(err.to_string())
    }
}

/// Result type for tag rendering operations.
pub type Result<T> = std::result::Result<T, TagError>;
