//! Format constants and magic bytes for the ARSP encodings

/// Magic bytes for label-bearing sparse data
pub const LABELED_MAGIC: [u8; 4] = *b"ARSN";

/// Magic bytes for plain COO data
pub const PLAIN_MAGIC: [u8; 4] = *b"ARSP";

/// Width of one header field (i64) in bytes
pub const FIELD_SIZE: usize = 8;

/// Magic tag plus `nnz`, `num_rows`, `num_cols`
pub const HEADER_SIZE: usize = 4 + 3 * FIELD_SIZE;

/// Bytes per coordinate pair (two i64)
pub const COORD_PAIR_SIZE: usize = 2 * FIELD_SIZE;

/// Columnar table field names, in schema order
pub mod columns {
    pub const READ_ID: &str = "read_id";
    pub const ROW: &str = "row";
    pub const COL: &str = "col";
    pub const VALUE: &str = "value";

    /// All field names in on-disk order
    pub const ALL: [&str; 4] = [READ_ID, ROW, COL, VALUE];
}
