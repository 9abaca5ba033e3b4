//! # Error Types
//!
//! Structured error types for matcheck_core. Only structural problems with a
//! reference file are errors: a file unreadable under both encodings, or a
//! required column missing from its header. Both abort index construction,
//! since no query can be trusted against a broken table.
//!
//! Per-row defects (empty key tokens, unparseable numeric cells, short rows)
//! are never errors; the offending row is dropped and the rest of the file is
//! kept. Query-time misses are plain absent fields, not errors.
//!
//! ## Example
//!
//! ```rust
//! use matcheck_core::errors::{DataError, DataResult};
//!
//! fn require_header(found: bool) -> DataResult<()> {
//!     if !found {
//!         return Err(DataError::missing_column("baseconductivity.txt", "temper"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for matcheck_core operations
pub type DataResult<T> = Result<T, DataError>;

/// Structured error type for reference-table ingestion.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DataError {
    /// File I/O error (missing file, permission problem, unreadable content)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// A required column is missing from a table's header row
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },
}

impl DataError {
    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DataError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingColumn error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        DataError::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::FileError { .. } => "FILE_ERROR",
            DataError::MissingColumn { .. } => "MISSING_COLUMN",
        }
    }
}
