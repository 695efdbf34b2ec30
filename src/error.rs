//! Custom error types for the expense tracker
//!
//! Store operations never fail; errors only come from the layers around the
//! store (configuration files, session input and output).

use rustyline::error::ReadlineError;
use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Line editor failures in the interactive shell
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A session command line that could not be understood
    #[error("Command error: {0}")]
    Command(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the session can report this error and keep reading commands
    pub fn is_recoverable(&self) -> bool {
        self.is_not_found() || matches!(self, Self::Command(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
