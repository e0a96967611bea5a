//! Coordinate/value model for sparse matrix exports
//!
//! [`CooView`] is a validated, zero-copy view over caller-owned arrays. It
//! lives for a single export call and never mutates the data it borrows.

use crate::error::{ArspError, Result};
use crate::format::{SparseHeader, Variant};
use crate::traits::{MatrixElement, SparseMatrix};
use crate::validation::{
    total_label_bytes, validate_cardinality, validate_coordinates, validate_dimensions,
    validate_label_count,
};

/// Per-row label table, indexed by row position
///
/// Labels are arbitrary byte strings: not necessarily UTF-8, unique or
/// null-terminated.
#[derive(Debug, Clone, Copy)]
pub struct RowLabels<'a> {
    labels: &'a [&'a [u8]],
    total_bytes: usize,
}

impl<'a> RowLabels<'a> {
    /// Wrap a label slice, computing its concatenated byte length
    pub fn new(labels: &'a [&'a [u8]]) -> Result<Self> {
        let total_bytes = total_label_bytes(labels.iter().copied())?;
        Ok(Self {
            labels,
            total_bytes,
        })
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of `row`, if it exists
    pub fn get(&self, row: usize) -> Option<&'a [u8]> {
        self.labels.get(row).copied()
    }

    /// Sum of all label byte lengths
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Labels in row order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a [u8]> + 'a {
        self.labels.iter().copied()
    }
}

/// Validated view of a COO sparse matrix with an optional row label table
#[derive(Debug, Clone, Copy)]
pub struct CooView<'a, T: MatrixElement> {
    nnz: usize,
    num_rows: usize,
    num_cols: usize,
    coords: &'a [i64],
    values: &'a [T],
    labels: Option<RowLabels<'a>>,
}

impl<'a, T: MatrixElement> CooView<'a, T> {
    /// Build a view over flattened `[row0, col0, row1, col1, ...]`
    /// coordinates and their values, checking the declared shape
    pub fn new(
        nnz: i64,
        num_rows: i64,
        num_cols: i64,
        coords: &'a [i64],
        values: &'a [T],
    ) -> Result<Self> {
        let (nnz, num_rows, num_cols) = validate_dimensions(nnz, num_rows, num_cols)?;
        let view = Self {
            nnz,
            num_rows,
            num_cols,
            coords,
            values,
            labels: None,
        };
        view.validate()?;
        Ok(view)
    }

    /// Attach a row label table; it must hold exactly `num_rows` labels
    pub fn with_row_labels(mut self, labels: RowLabels<'a>) -> Result<Self> {
        validate_label_count(labels.len(), self.num_rows)?;
        self.labels = Some(labels);
        Ok(self)
    }

    /// Re-run every shape check against the borrowed arrays
    ///
    /// With labels attached, every row referenced by an entry resolves to a
    /// label because rows are bounded by `num_rows` and there is one label
    /// per row.
    pub fn validate(&self) -> Result<()> {
        validate_cardinality(self.nnz, self.coords.len(), self.values.len())?;
        validate_coordinates(self.coords, self.num_rows, self.num_cols)?;
        if let Some(labels) = &self.labels {
            validate_label_count(labels.len(), self.num_rows)?;
        }
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Flattened coordinate pairs in input order
    pub fn coords(&self) -> &'a [i64] {
        self.coords
    }

    /// Values in input order
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    pub fn labels(&self) -> Option<&RowLabels<'a>> {
        self.labels.as_ref()
    }

    /// Label table, or [`ArspError::MissingLabels`] for unlabeled views
    pub fn require_labels(&self) -> Result<&RowLabels<'a>> {
        self.labels.as_ref().ok_or(ArspError::MissingLabels)
    }

    /// Row index of every entry, in input order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = i64> + 'a {
        self.coords.chunks_exact(2).map(|pair| pair[0])
    }

    /// Column index of every entry, in input order
    pub fn cols(&self) -> impl ExactSizeIterator<Item = i64> + 'a {
        self.coords.chunks_exact(2).map(|pair| pair[1])
    }

    /// Label of the row referenced by entry `index`
    pub fn entry_label(&self, index: usize) -> Option<&'a [u8]> {
        let row = *self.coords.get(index.checked_mul(2)?)?;
        self.labels?.get(row as usize)
    }

    /// Stream header describing this view under `variant`
    pub fn header(&self, variant: Variant) -> SparseHeader {
        // Dimensions originated as non-negative i64, so these casts are lossless
        SparseHeader::new(
            variant,
            self.nnz as i64,
            self.num_rows as i64,
            self.num_cols as i64,
        )
    }
}

impl<T: MatrixElement> SparseMatrix for CooView<'_, T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn nnz(&self) -> usize {
        self.nnz
    }

    fn entry(&self, index: usize) -> Option<(usize, usize, T)> {
        let start = index.checked_mul(2)?;
        let pair = self.coords.get(start..start + 2)?;
        let value = *self.values.get(index)?;
        Some((pair[0] as usize, pair[1] as usize, value))
    }
}
