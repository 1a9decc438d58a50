//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration and dispatch.
///
/// These are rejections raised by the registry before a handler runs.
/// Handlers themselves report failures as text content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),

    /// An argument failed schema validation.
    #[error("Invalid argument '{field}': expected {expected}")]
    Validation { field: String, expected: String },

    /// The arguments payload itself is malformed (not a JSON object).
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    /// Create a new validation error for `field`.
    pub fn validation(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Name of the offending field, for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
