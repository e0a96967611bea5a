//! Abstract interfaces for ARSP matrices and elements

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
