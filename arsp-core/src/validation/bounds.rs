//! Shape and bounds validation for ARSP matrices
//!
//! This module provides pure validation functions over the caller's raw
//! arrays with no I/O dependencies. Each check reports the first violation
//! it finds.

use crate::error::{ArspError, Result};

/// Validate declared dimensions and convert them to `usize`
///
/// Returns `(nnz, num_rows, num_cols)`.
pub fn validate_dimensions(nnz: i64, num_rows: i64, num_cols: i64) -> Result<(usize, usize, usize)> {
    if nnz < 0 || num_rows < 0 || num_cols < 0 {
        return Err(ArspError::NegativeDimension);
    }

    let convert = |v: i64| usize::try_from(v).map_err(|_| ArspError::SizeOverflow);
    Ok((convert(nnz)?, convert(num_rows)?, convert(num_cols)?))
}

/// Validate that the parallel arrays hold exactly `nnz` entries
///
/// `coords_len` counts i64 elements of the flattened `[row0, col0, ...]`
/// array, so it must equal `2 * nnz`.
pub fn validate_cardinality(nnz: usize, coords_len: usize, values_len: usize) -> Result<()> {
    let expected_coords = nnz.checked_mul(2).ok_or(ArspError::SizeOverflow)?;
    if coords_len != expected_coords {
        return Err(ArspError::CoordinateCountMismatch {
            expected: expected_coords,
            actual: coords_len,
        });
    }

    if values_len != nnz {
        return Err(ArspError::ValueCountMismatch {
            expected: nnz,
            actual: values_len,
        });
    }

    Ok(())
}

/// Validate that every (row, col) pair lies inside the declared shape
pub fn validate_coordinates(coords: &[i64], num_rows: usize, num_cols: usize) -> Result<()> {
    for (entry, pair) in coords.chunks_exact(2).enumerate() {
        let (row, col) = (pair[0], pair[1]);
        if !index_in_range(row, num_rows) {
            return Err(ArspError::RowOutOfBounds { entry, row });
        }
        if !index_in_range(col, num_cols) {
            return Err(ArspError::ColOutOfBounds { entry, col });
        }
    }
    Ok(())
}

/// Validate that a label table has one label per row
pub fn validate_label_count(label_count: usize, num_rows: usize) -> Result<()> {
    if label_count != num_rows {
        return Err(ArspError::LabelCountMismatch {
            expected: num_rows,
            actual: label_count,
        });
    }
    Ok(())
}

/// Validate caller-supplied label byte lengths and convert them to `usize`
pub fn validate_label_length(row: usize, length: i64) -> Result<usize> {
    if length < 0 {
        return Err(ArspError::NegativeLabelLength { row });
    }
    usize::try_from(length).map_err(|_| ArspError::SizeOverflow)
}

/// Sum of label byte lengths with overflow protection
pub fn total_label_bytes<'a, I>(labels: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    labels.into_iter().try_fold(0usize, |total, label| {
        total.checked_add(label.len()).ok_or(ArspError::SizeOverflow)
    })
}

#[inline]
fn index_in_range(index: i64, bound: usize) -> bool {
    index >= 0 && (index as u64) < bound as u64
}
