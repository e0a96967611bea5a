//! Core ARSP header format definitions
//!
//! This module contains the fixed stream header shared by both binary
//! variants and the enums that tag them.

use super::constants::{FIELD_SIZE, HEADER_SIZE, LABELED_MAGIC, PLAIN_MAGIC};

/// Encoding variant of a binary ARSP stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Row label table present, u32 values ("ARSN")
    Labeled,
    /// Coordinates and f64 values only ("ARSP")
    Plain,
}

impl Variant {
    /// Magic tag written at the start of the stream
    pub const fn magic(&self) -> [u8; 4] {
        match self {
            Variant::Labeled => LABELED_MAGIC,
            Variant::Plain => PLAIN_MAGIC,
        }
    }

    /// Value type carried by this variant
    pub const fn value_type(&self) -> DataType {
        match self {
            Variant::Labeled => DataType::U32,
            Variant::Plain => DataType::F64,
        }
    }

    /// Look up the variant for a magic tag
    pub fn from_magic(magic: &[u8; 4]) -> Option<Self> {
        match *magic {
            LABELED_MAGIC => Some(Variant::Labeled),
            PLAIN_MAGIC => Some(Variant::Plain),
            _ => None,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Variant::Labeled => write!(f, "ARSN"),
            Variant::Plain => write!(f, "ARSP"),
        }
    }
}

/// Scalar types that can appear in a value array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U32 = 4,
    U64 = 5,
}

impl DataType {
    /// Get the size in bytes for this data type
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::F32 | DataType::I32 | DataType::U32 => 4,
            DataType::F64 | DataType::I64 | DataType::U64 => 8,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::U32 => write!(f, "u32"),
            DataType::U64 => write!(f, "u64"),
        }
    }
}

/// Fixed-size stream header: magic tag followed by three i64 fields
///
/// Fields are written in native byte order with no padding, so a header is
/// only meaningful on a machine with the writer's endianness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseHeader {
    /// Magic bytes: "ARSN" or "ARSP"
    pub magic: [u8; 4],
    /// Number of stored entries
    pub nnz: i64,
    /// Number of rows in the logical dense matrix
    pub num_rows: i64,
    /// Number of columns in the logical dense matrix
    pub num_cols: i64,
}

impl SparseHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a header for the given variant and shape
    pub const fn new(variant: Variant, nnz: i64, num_rows: i64, num_cols: i64) -> Self {
        Self {
            magic: variant.magic(),
            nnz,
            num_rows,
            num_cols,
        }
    }

    /// Variant encoded by the magic tag, if recognised
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_magic(&self.magic)
    }

    /// Serialize to the native-endian on-disk image
    pub fn to_ne_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..4 + FIELD_SIZE].copy_from_slice(&self.nnz.to_ne_bytes());
        bytes[12..12 + FIELD_SIZE].copy_from_slice(&self.num_rows.to_ne_bytes());
        bytes[20..20 + FIELD_SIZE].copy_from_slice(&self.num_cols.to_ne_bytes());
        bytes
    }
}
