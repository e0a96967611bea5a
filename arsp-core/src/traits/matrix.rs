//! Core matrix abstraction traits for ARSP
//!
//! This module defines the read-only interface encoders consume.

use super::element::MatrixElement;

/// Read-only access to a coordinate-format sparse matrix
///
/// Entries are exposed in storage order; nothing here implies they are
/// sorted or unique.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;

    /// Get the `(row, col, value)` of the entry at `index` in storage order
    fn entry(&self, index: usize) -> Option<(usize, usize, Self::Element)>;
}
