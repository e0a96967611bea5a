//! Export entry points
//!
//! Each entry point validates the caller's arrays into a [`CooView`], runs
//! one encoder inside a [`WriteTransaction`] and reports what was written.
//! [`status_of`] and [`guarded_status`] collapse the outcome to the legacy
//! integer status for callers that only understand `0` / non-zero.

use crate::binary::{LabeledBinaryEncoder, PlainBinaryEncoder};
use crate::config::ExportOptions;
use crate::encoder::SparseEncoder;
use crate::error::{ExportError, Result, SUCCESS_STATUS};
use crate::report::ExportReport;
use crate::transaction::WriteTransaction;
use arsp_core::{CooView, RowLabels, SparseMatrix};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(feature = "columnar")]
use crate::columnar::ColumnarEncoder;

/// Encode `matrix` with `encoder` and atomically write it to `destination`
pub fn export<E, P>(
    encoder: &E,
    matrix: &CooView<'_, E::Element>,
    destination: P,
    options: &ExportOptions,
) -> Result<ExportReport>
where
    E: SparseEncoder,
    P: AsRef<Path>,
{
    let destination = destination.as_ref();
    let format = encoder.format();
    debug!(%format, nnz = matrix.nnz(), "starting export");

    let mut txn = WriteTransaction::begin(destination, options)?;
    if let Err(err) = txn.write_with(|sink| encoder.encode(matrix, sink)) {
        warn!(
            %format,
            destination = %destination.display(),
            error = %err,
            "export failed, discarding temporary file"
        );
        return Err(err);
    }
    let bytes_written = txn.commit()?;

    let (num_rows, num_cols) = matrix.dimensions();
    Ok(ExportReport {
        path: destination.to_path_buf(),
        format,
        nnz: matrix.nnz(),
        num_rows,
        num_cols,
        bytes_written,
    })
}

/// Write a labeled matrix with u32 values as an "ARSN" binary stream
pub fn write_labeled_sparse<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[u32],
    labels: &[&[u8]],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> Result<ExportReport> {
    write_labeled_sparse_with_options(
        destination,
        coords,
        values,
        labels,
        nnz,
        num_rows,
        num_cols,
        &ExportOptions::default(),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn write_labeled_sparse_with_options<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[u32],
    labels: &[&[u8]],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let matrix = labeled_view(coords, values, labels, nnz, num_rows, num_cols)?;
    export(&LabeledBinaryEncoder, &matrix, destination, options)
}

/// Write a plain COO matrix with f64 values as an "ARSP" binary stream
pub fn write_plain_coo<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[f64],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> Result<ExportReport> {
    write_plain_coo_with_options(
        destination,
        coords,
        values,
        nnz,
        num_rows,
        num_cols,
        &ExportOptions::default(),
    )
}

pub fn write_plain_coo_with_options<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[f64],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let matrix = CooView::new(nnz, num_rows, num_cols, coords, values)?;
    export(&PlainBinaryEncoder, &matrix, destination, options)
}

/// Write a labeled matrix with u32 values as an Arrow IPC table
#[cfg(feature = "columnar")]
pub fn write_columnar_sparse<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[u32],
    labels: &[&[u8]],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> Result<ExportReport> {
    write_columnar_sparse_with_options(
        destination,
        coords,
        values,
        labels,
        nnz,
        num_rows,
        num_cols,
        &ExportOptions::default(),
    )
}

#[cfg(feature = "columnar")]
#[allow(clippy::too_many_arguments)]
pub fn write_columnar_sparse_with_options<P: AsRef<Path>>(
    destination: P,
    coords: &[i64],
    values: &[u32],
    labels: &[&[u8]],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let matrix = labeled_view(coords, values, labels, nnz, num_rows, num_cols)?;
    let encoder = ColumnarEncoder::with_alignment(options.ipc_alignment)?;
    export(&encoder, &matrix, destination, options)
}

fn labeled_view<'a>(
    coords: &'a [i64],
    values: &'a [u32],
    labels: &'a [&'a [u8]],
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> Result<CooView<'a, u32>> {
    let labels = RowLabels::new(labels)?;
    let matrix = CooView::new(nnz, num_rows, num_cols, coords, values)?.with_row_labels(labels)?;
    Ok(matrix)
}

/// Legacy status of an export result: `0` on success, `-1` otherwise
pub fn status_of<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => SUCCESS_STATUS,
        Err(err) => err.status(),
    }
}

/// Run an export and return its legacy status, catching panics
///
/// Nothing escapes this call: errors and panics both become `-1`.
pub fn guarded_status<T, F>(export: F) -> i32
where
    F: FnOnce() -> Result<T>,
{
    let result = panic::catch_unwind(AssertUnwindSafe(export)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(ExportError::Internal(message))
    });

    if let Err(err) = &result {
        warn!(kind = ?err.kind(), error = %err, "export failed");
    }
    status_of(&result)
}
