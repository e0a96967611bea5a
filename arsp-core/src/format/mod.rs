//! Binary format definitions for ARSP outputs
//!
//! This module contains pure data structure definitions for the wire formats.
//! No I/O operations - only layouts and their size arithmetic.

pub mod constants;
pub mod header;
pub mod layout;

pub use header::{DataType, SparseHeader, Variant};
pub use layout::EncodedLayout;
