//! Errors surfaced while configuring a grid.

use std::fmt;

/// Failure to configure or spawn a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns was zero or negative.
    InvalidDimensions { rows: i64, columns: i64 },
    /// A dimension field did not contain an integer.
    InvalidInput { field: &'static str, input: String },
    /// The setup form was already submitted.
    FormLocked,
    /// The JSON configuration could not be read.
    Config(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, columns } => write!(
                f,
                "grid dimensions must be positive, got {rows} rows × {columns} columns"
            ),
            GridError::InvalidInput { field, input } => {
                write!(f, "{field} must be a whole number, got {input:?}")
            }
            GridError::FormLocked => write!(f, "setup form is locked"),
            GridError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Config(err.to_string())
    }
}
