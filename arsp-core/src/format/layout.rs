//! Section offsets and sizes of the binary ARSP variants
//!
//! Sections follow each other with no padding. All arithmetic is checked so
//! that an absurd shape is reported as [`ArspError::SizeOverflow`] instead of
//! wrapping.

use super::constants::{COORD_PAIR_SIZE, FIELD_SIZE, HEADER_SIZE};
use super::header::Variant;
use crate::error::{ArspError, Result};

/// Byte layout of one encoded stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedLayout {
    pub variant: Variant,
    /// Offset of the `total_label_bytes` field (labeled only)
    pub label_total_offset: usize,
    /// Offset and size of the per-row label length array
    pub label_lengths_offset: usize,
    pub label_lengths_size: usize,
    /// Offset and size of the concatenated label bytes
    pub label_bytes_offset: usize,
    pub label_bytes_size: usize,
    /// Offset and size of the interleaved (row, col) pairs
    pub coords_offset: usize,
    pub coords_size: usize,
    /// Offset and size of the value array
    pub values_offset: usize,
    pub values_size: usize,
    /// Total stream length
    pub total_size: usize,
}

impl EncodedLayout {
    /// Layout of a labeled ("ARSN") stream
    pub fn labeled(nnz: usize, num_rows: usize, total_label_bytes: usize) -> Result<Self> {
        let label_total_offset = HEADER_SIZE;
        let label_lengths_offset = label_total_offset + FIELD_SIZE;
        let label_lengths_size = checked_mul(num_rows, FIELD_SIZE)?;
        let label_bytes_offset = checked_add(label_lengths_offset, label_lengths_size)?;
        let coords_offset = checked_add(label_bytes_offset, total_label_bytes)?;

        Self::with_payload(
            Variant::Labeled,
            nnz,
            label_total_offset,
            label_lengths_offset,
            label_lengths_size,
            label_bytes_offset,
            total_label_bytes,
            coords_offset,
        )
    }

    /// Layout of a plain COO ("ARSP") stream
    pub fn plain(nnz: usize) -> Result<Self> {
        Self::with_payload(Variant::Plain, nnz, 0, 0, 0, 0, 0, HEADER_SIZE)
    }

    #[allow(clippy::too_many_arguments)]
    fn with_payload(
        variant: Variant,
        nnz: usize,
        label_total_offset: usize,
        label_lengths_offset: usize,
        label_lengths_size: usize,
        label_bytes_offset: usize,
        label_bytes_size: usize,
        coords_offset: usize,
    ) -> Result<Self> {
        let coords_size = checked_mul(nnz, COORD_PAIR_SIZE)?;
        let values_offset = checked_add(coords_offset, coords_size)?;
        let values_size = checked_mul(nnz, variant.value_type().size_bytes())?;
        let total_size = checked_add(values_offset, values_size)?;

        Ok(Self {
            variant,
            label_total_offset,
            label_lengths_offset,
            label_lengths_size,
            label_bytes_offset,
            label_bytes_size,
            coords_offset,
            coords_size,
            values_offset,
            values_size,
            total_size,
        })
    }
}

fn checked_mul(a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or(ArspError::SizeOverflow)
}

fn checked_add(a: usize, b: usize) -> Result<usize> {
    a.checked_add(b).ok_or(ArspError::SizeOverflow)
}
