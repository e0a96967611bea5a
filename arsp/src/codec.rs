//! Native-endian fixed-width field encoding
//!
//! Every byte an ARSP binary stream contains passes through [`FieldWriter`].
//! Numbers are written as their in-memory image (native byte order, no
//! padding), which makes the output non-portable across endianness. Keeping
//! the conversion here means a fixed little-endian encoding only has to
//! change this file.

use crate::error::{ExportError, Result};
use std::io::Write;

/// Writer for fixed-width fields that tracks how many bytes it emitted
pub struct FieldWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> FieldWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Write raw bytes unchanged
    pub fn write_bytes(&mut self, bytes: &[u8], operation: &'static str) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(ExportError::io(operation))?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    /// Write one i64 in native byte order
    pub fn write_i64(&mut self, value: i64, operation: &'static str) -> Result<()> {
        self.write_bytes(&value.to_ne_bytes(), operation)
    }

    /// Write a whole slice of fixed-width scalars as its memory image
    pub fn write_slice<T: bytemuck::Pod>(
        &mut self,
        values: &[T],
        operation: &'static str,
    ) -> Result<()> {
        self.write_bytes(bytemuck::cast_slice(values), operation)
    }

    /// Write a sequence of i64 values without materialising them
    pub fn write_i64_iter<I>(&mut self, values: I, operation: &'static str) -> Result<()>
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            self.write_i64(value, operation)?;
        }
        Ok(())
    }

    /// Total bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.written
    }
}
