//! Encoding strategy abstraction
//!
//! Each on-disk format is a [`SparseEncoder`] that lowers a validated
//! [`CooView`] into a byte sink. Formats are never unified: each keeps its
//! own exact layout.

use crate::error::Result;
use arsp_core::{CooView, MatrixElement};
use std::io::Write;

/// On-disk format produced by an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputFormat {
    /// Custom binary stream with row labels ("ARSN")
    LabeledBinary,
    /// Custom binary stream, coordinates and f64 values ("ARSP")
    PlainBinary,
    /// Arrow IPC file with schema `{read_id, row, col, value}`
    Columnar,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::LabeledBinary => write!(f, "labeled-binary"),
            OutputFormat::PlainBinary => write!(f, "plain-binary"),
            OutputFormat::Columnar => write!(f, "columnar"),
        }
    }
}

/// Strategy that writes a sparse matrix in one on-disk format
pub trait SparseEncoder {
    /// Value type this format stores
    type Element: MatrixElement;

    /// Format produced by this encoder
    fn format(&self) -> OutputFormat;

    /// Write the complete encoding of `matrix` to `sink`
    ///
    /// The matrix is already shape-validated. Encoders only fail on
    /// format-specific requirements (missing labels, unencodable values)
    /// or when the sink fails.
    fn encode<W: Write>(&self, matrix: &CooView<'_, Self::Element>, sink: &mut W) -> Result<()>;
}
