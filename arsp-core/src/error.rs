//! Error types for ARSP shape validation

/// Errors raised while validating a sparse matrix against its declared shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArspError {
    /// `nnz`, `num_rows` or `num_cols` is negative
    NegativeDimension,
    /// Coordinate array does not hold exactly `nnz` (row, col) pairs
    CoordinateCountMismatch { expected: usize, actual: usize },
    /// Value array does not hold exactly `nnz` elements
    ValueCountMismatch { expected: usize, actual: usize },
    /// Label table does not hold exactly `num_rows` labels
    LabelCountMismatch { expected: usize, actual: usize },
    /// A label byte length is negative
    NegativeLabelLength { row: usize },
    /// Entry references a row outside `0..num_rows`
    RowOutOfBounds { entry: usize, row: i64 },
    /// Entry references a column outside `0..num_cols`
    ColOutOfBounds { entry: usize, col: i64 },
    /// Variant requires a row label table but none was attached
    MissingLabels,
    /// A caller-supplied array pointer is null but its length is not zero
    NullPointer { argument: &'static str },
    /// Size calculation would overflow
    SizeOverflow,
}

impl core::fmt::Display for ArspError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArspError::NegativeDimension => write!(f, "Negative matrix dimension or nnz"),
            ArspError::CoordinateCountMismatch { expected, actual } => {
                write!(f, "Expected {expected} coordinate values, got {actual}")
            }
            ArspError::ValueCountMismatch { expected, actual } => {
                write!(f, "Expected {expected} values, got {actual}")
            }
            ArspError::LabelCountMismatch { expected, actual } => {
                write!(f, "Expected {expected} row labels, got {actual}")
            }
            ArspError::NegativeLabelLength { row } => {
                write!(f, "Negative label length for row {row}")
            }
            ArspError::RowOutOfBounds { entry, row } => {
                write!(f, "Entry {entry} has row index {row} out of bounds")
            }
            ArspError::ColOutOfBounds { entry, col } => {
                write!(f, "Entry {entry} has column index {col} out of bounds")
            }
            ArspError::MissingLabels => write!(f, "Row label table required"),
            ArspError::NullPointer { argument } => {
                write!(f, "Null pointer passed for non-empty {argument}")
            }
            ArspError::SizeOverflow => write!(f, "Size calculation would overflow"),
        }
    }
}

/// Result type for ARSP validation
pub type Result<T> = core::result::Result<T, ArspError>;
