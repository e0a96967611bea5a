//! Matrix element type constraints for ARSP value arrays
//!
//! This module defines the trait that constrains what types can be
//! written as values in an ARSP stream or table.

use crate::format::DataType;

/// Trait for types that can be stored as matrix values
///
/// Elements are plain fixed-width scalars. The `Pod` bound lets encoders
/// dump a whole value slice as its in-memory image without copying.
pub trait MatrixElement: bytemuck::Pod + PartialEq + core::fmt::Debug {
    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn data_type() -> DataType {
                    DataType::$tag
                }
            }
        )*
    };
}

impl_matrix_element! {
    f32 => F32,
    f64 => F64,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
}
