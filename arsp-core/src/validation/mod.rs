//! Shape validation utilities for ARSP matrices
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;

pub use bounds::{
    total_label_bytes, validate_cardinality, validate_coordinates, validate_dimensions,
    validate_label_count, validate_label_length,
};
