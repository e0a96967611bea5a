//! ARSP - Sparse Matrix Export Encoders
//!
//! This library writes coordinate-format sparse matrices, optionally
//! annotated with per-row labels, to self-describing files.
//!
//! ## Architecture
//!
//! ARSP separates format definitions from I/O:
//!
//! - **arsp-core**: Pure format definitions, the validated COO model, and
//!   shape checks (no I/O)
//! - **arsp**: Encoders, atomic file writes, and the C ABI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arsp::{write_labeled_sparse, ExportError};
//!
//! fn example() -> Result<(), ExportError> {
//!     let labels: [&[u8]; 2] = [b"read_0", b"read_1"];
//!     let coords = [0, 5, 0, 6, 1, 2];
//!     let values = [10u32, 20, 30];
//!
//!     let report = write_labeled_sparse("counts.arsn", &coords, &values, &labels, 3, 2, 7)?;
//!     println!("wrote {} bytes", report.bytes_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Formats
//!
//! - **ARSN**: binary stream with a row label table and u32 values
//! - **ARSP**: binary stream with f64 values and no labels
//! - **Columnar**: Arrow IPC file `{read_id, row, col, value}`, one row per
//!   stored entry (`columnar` feature)
//!
//! Binary streams use native byte order and are not portable across
//! endianness. Every format is written to a temporary file and renamed into
//! place only when complete.

// Re-export core abstractions and format definitions
pub use arsp_core::{
    // Model
    CooView, RowLabels, SparseMatrix, MatrixElement,
    // Format definitions
    DataType, EncodedLayout, SparseHeader, Variant,
    // Shape errors
    ArspError,
};

// Implementation modules
pub mod binary;
pub mod codec;
#[cfg(feature = "columnar")]
pub mod columnar;
pub mod config;
pub mod encoder;
pub mod error;
pub mod export;
pub mod ffi;
pub mod report;
pub mod transaction;

// Public exports
pub use binary::{LabeledBinaryEncoder, PlainBinaryEncoder};
pub use config::ExportOptions;
pub use encoder::{OutputFormat, SparseEncoder};
pub use error::{ErrorKind, ExportError, Result, FAILURE_STATUS, SUCCESS_STATUS};
pub use export::{
    export, guarded_status, status_of, write_labeled_sparse, write_labeled_sparse_with_options,
    write_plain_coo, write_plain_coo_with_options,
};
pub use report::ExportReport;
pub use transaction::WriteTransaction;

// Columnar features
#[cfg(feature = "columnar")]
pub use columnar::{sparse_schema, ColumnarEncoder};
#[cfg(feature = "columnar")]
pub use export::{write_columnar_sparse, write_columnar_sparse_with_options};
