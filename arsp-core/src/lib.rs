#![cfg_attr(not(test), no_std)]

//! ARSP Core - Sparse Matrix Export Format Definitions
//!
//! This crate provides the validated coordinate/value model, the binary
//! header and layout definitions, and the shape checks shared by every
//! ARSP encoder. It performs no I/O.

pub mod error;
pub mod format;
pub mod model;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use model::{CooView, RowLabels};
pub use traits::*;
