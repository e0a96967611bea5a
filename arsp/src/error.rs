//! Export error types and the legacy status mapping
//!
//! Every failure inside an export is an [`ExportError`]. At the outer call
//! boundary it collapses to [`FAILURE_STATUS`]; inside the crate the
//! [`ErrorKind`] stays available for logging and tests.

use arsp_core::ArspError;
use thiserror::Error;

/// Status returned for a successful export
pub const SUCCESS_STATUS: i32 = 0;

/// Status returned for any failed export
pub const FAILURE_STATUS: i32 = -1;

/// Coarse classification of an export failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index out of bounds or length mismatch between parallel arrays
    Shape,
    /// Destination could not be opened, written or finalized
    Io,
    /// A column or table could not be built (columnar variant)
    Build,
    /// A panic was caught at the status boundary
    Internal,
}

/// Errors that can occur while exporting a sparse matrix
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Shape error: {0}")]
    Shape(ArspError),

    #[error("I/O error while {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "columnar")]
    #[error("Failed to build {step}: {source}")]
    Build {
        step: &'static str,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("Label for row {row} is not valid UTF-8")]
    InvalidLabel { row: usize },

    #[error("Export panicked: {0}")]
    Internal(String),
}

impl From<ArspError> for ExportError {
    fn from(err: ArspError) -> Self {
        ExportError::Shape(err)
    }
}

impl ExportError {
    pub(crate) fn io(operation: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| ExportError::Io { operation, source }
    }

    #[cfg(feature = "columnar")]
    pub(crate) fn build(step: &'static str) -> impl FnOnce(arrow::error::ArrowError) -> Self {
        move |source| ExportError::Build { step, source }
    }

    /// Discriminated kind of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Shape(_) => ErrorKind::Shape,
            ExportError::Io { .. } => ErrorKind::Io,
            #[cfg(feature = "columnar")]
            ExportError::Build { .. } => ErrorKind::Build,
            ExportError::InvalidLabel { .. } => ErrorKind::Build,
            ExportError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Legacy single-integer status; identical for every kind
    pub fn status(&self) -> i32 {
        FAILURE_STATUS
    }
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
