//! C ABI for pipelines that call the exporter through raw pointers
//!
//! Every function returns `0` on success and `-1` on any failure. Errors and
//! panics never cross the boundary. A pointer may be null only when the
//! number of elements it would describe is zero.
//!
//! # Safety
//!
//! Callers must pass pointers that are valid for reads of the element
//! counts implied by `nnz` and `num_rows`, and a NUL-terminated path.

use crate::error::{ExportError, Result};
use crate::export::guarded_status;
use arsp_core::validation::validate_label_length;
use arsp_core::ArspError;
use std::ffi::{c_char, c_int, CStr};
use std::path::PathBuf;

/// Write a labeled matrix as an Arrow IPC table
///
/// # Safety
///
/// See the [module documentation](self).
#[cfg(feature = "columnar")]
#[no_mangle]
pub unsafe extern "C" fn write_arrow_sparse(
    filename: *const c_char,
    coords: *const i64,
    values: *const u32,
    read_names: *const *const c_char,
    read_name_lengths: *const i64,
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> c_int {
    guarded_status(|| {
        let path = path_from_c(filename)?;
        let coords = coords_from_raw(coords, nnz)?;
        let values = values_from_raw(values, nnz)?;
        let labels = labels_from_raw(read_names, read_name_lengths, num_rows)?;
        crate::export::write_columnar_sparse(
            path, coords, values, &labels, nnz, num_rows, num_cols,
        )
    })
}

/// Write a labeled matrix as an "ARSN" binary stream
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn write_arrow_sparse_labeled(
    filename: *const c_char,
    coords: *const i64,
    values: *const u32,
    read_names: *const *const c_char,
    read_name_lengths: *const i64,
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> c_int {
    guarded_status(|| {
        let path = path_from_c(filename)?;
        let coords = coords_from_raw(coords, nnz)?;
        let values = values_from_raw(values, nnz)?;
        let labels = labels_from_raw(read_names, read_name_lengths, num_rows)?;
        crate::export::write_labeled_sparse(
            path, coords, values, &labels, nnz, num_rows, num_cols,
        )
    })
}

/// Write a plain COO matrix as an "ARSP" binary stream
///
/// # Safety
///
/// See the [module documentation](self).
#[no_mangle]
pub unsafe extern "C" fn write_arrow_sparse_coo(
    filename: *const c_char,
    coords: *const i64,
    values: *const f64,
    nnz: i64,
    num_rows: i64,
    num_cols: i64,
) -> c_int {
    guarded_status(|| {
        let path = path_from_c(filename)?;
        let coords = coords_from_raw(coords, nnz)?;
        let values = values_from_raw(values, nnz)?;
        crate::export::write_plain_coo(path, coords, values, nnz, num_rows, num_cols)
    })
}

unsafe fn path_from_c(filename: *const c_char) -> Result<PathBuf> {
    if filename.is_null() {
        return Err(null_pointer("filename"));
    }
    let bytes = CStr::from_ptr(filename).to_bytes();

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Ok(PathBuf::from(std::ffi::OsStr::from_bytes(bytes)))
    }
    #[cfg(not(unix))]
    {
        std::str::from_utf8(bytes)
            .map(PathBuf::from)
            .map_err(|_| ExportError::Io {
                operation: "decoding destination path",
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path is not valid UTF-8",
                ),
            })
    }
}

unsafe fn coords_from_raw<'a>(coords: *const i64, nnz: i64) -> Result<&'a [i64]> {
    let len = element_count(nnz)?
        .checked_mul(2)
        .ok_or(ArspError::SizeOverflow)?;
    raw_slice(coords, len, "coords")
}

unsafe fn values_from_raw<'a, T>(values: *const T, nnz: i64) -> Result<&'a [T]> {
    raw_slice(values, element_count(nnz)?, "values")
}

fn element_count(count: i64) -> Result<usize> {
    if count < 0 {
        return Err(ArspError::NegativeDimension.into());
    }
    usize::try_from(count).map_err(|_| ExportError::from(ArspError::SizeOverflow))
}

/// Borrow `len` elements starting at `ptr`
unsafe fn raw_slice<'a, T>(ptr: *const T, len: usize, argument: &'static str) -> Result<&'a [T]> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(null_pointer(argument));
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// Borrow `num_rows` labels described by pointer/length pairs
unsafe fn labels_from_raw<'a>(
    names: *const *const c_char,
    lengths: *const i64,
    num_rows: i64,
) -> Result<Vec<&'a [u8]>> {
    let count = element_count(num_rows)?;
    let names = raw_slice(names, count, "read_names")?;
    let lengths = raw_slice(lengths, count, "read_name_lengths")?;

    names
        .iter()
        .zip(lengths)
        .enumerate()
        .map(|(row, (&name, &length))| {
            let length = validate_label_length(row, length)?;
            raw_slice(name.cast::<u8>(), length, "read_names")
        })
        .collect()
}

fn null_pointer(argument: &'static str) -> ExportError {
    ArspError::NullPointer { argument }.into()
}
