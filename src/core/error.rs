//! Error types for the logger system

use super::registry::TargetId;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Template contains an escape sequence with an unknown control character
    #[error("Unexpected control character '{character}' at position {position}")]
    Format { character: char, position: usize },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Handle does not belong to any registered target
    #[error("Unknown target: {0}")]
    UnknownTarget(TargetId),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a template format error
    pub fn format(character: char, position: usize) -> Self {
        LoggerError::Format {
            character,
            position,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error came from template compilation
    pub fn is_format_error(&self) -> bool {
        matches!(self, LoggerError::Format { .. })
    }
}
