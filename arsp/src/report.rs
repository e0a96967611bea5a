//! Summary of a completed export

use crate::encoder::OutputFormat;
use std::path::PathBuf;

/// What a successful export wrote, and where
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExportReport {
    /// Final destination path
    pub path: PathBuf,
    pub format: OutputFormat,
    pub nnz: usize,
    pub num_rows: usize,
    pub num_cols: usize,
    /// Size of the committed file in bytes
    pub bytes_written: u64,
}
