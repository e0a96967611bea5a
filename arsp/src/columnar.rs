//! Columnar table encoder writing Arrow IPC files
//!
//! The table has one row per stored entry and the fixed schema
//! `{read_id: Utf8, row: Int64, col: Int64, value: UInt32}`. The label
//! column is denormalized: each entry carries the label of its row, so a
//! row with three entries repeats its label three times.
//!
//! All four columns are fully built before the table is assembled, and the
//! table is only handed to the IPC writer once assembly succeeded. A failure
//! at any step aborts the export without writing a partial table.

use crate::encoder::{OutputFormat, SparseEncoder};
use crate::error::{ExportError, Result};
use arrow::array::{ArrayRef, Int64Builder, StringBuilder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::ipc::writer::{FileWriter, IpcWriteOptions};
use arrow::ipc::MetadataVersion;
use arrow::record_batch::RecordBatch;
use arsp_core::format::constants::columns;
use arsp_core::{ArspError, CooView, RowLabels, SparseMatrix};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Fixed schema of the exported table; field order is part of the format
pub fn sparse_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(columns::READ_ID, DataType::Utf8, false),
        Field::new(columns::ROW, DataType::Int64, false),
        Field::new(columns::COL, DataType::Int64, false),
        Field::new(columns::VALUE, DataType::UInt32, false),
    ]))
}

/// Encoder for labeled u32 matrices as a single-batch Arrow IPC file
#[derive(Debug, Clone, Default)]
pub struct ColumnarEncoder {
    options: IpcWriteOptions,
}

impl ColumnarEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom IPC buffer alignment (a multiple of 8)
    pub fn with_alignment(alignment: usize) -> Result<Self> {
        let options = IpcWriteOptions::try_new(alignment, false, MetadataVersion::V5)
            .map_err(ExportError::build("IPC write options"))?;
        Ok(Self { options })
    }

    /// Build the four columns and bind them to the schema
    pub fn build_table(&self, matrix: &CooView<'_, u32>) -> Result<RecordBatch> {
        let labels = matrix.require_labels()?;

        let columns = vec![
            build_label_column(matrix, labels)?,
            build_index_column(matrix.rows(), matrix.nnz()),
            build_index_column(matrix.cols(), matrix.nnz()),
            build_value_column(matrix.values()),
        ];

        RecordBatch::try_new(sparse_schema(), columns).map_err(ExportError::build("table"))
    }
}

impl SparseEncoder for ColumnarEncoder {
    type Element = u32;

    fn format(&self) -> OutputFormat {
        OutputFormat::Columnar
    }

    fn encode<W: Write>(&self, matrix: &CooView<'_, u32>, sink: &mut W) -> Result<()> {
        let table = self.build_table(matrix)?;
        debug!(rows = table.num_rows(), "assembled sparse table");

        let mut writer =
            FileWriter::try_new_with_options(&mut *sink, &table.schema(), self.options.clone())
                .map_err(transport_error("opening table writer"))?;
        writer
            .write(&table)
            .map_err(transport_error("writing table"))?;
        writer
            .finish()
            .map_err(transport_error("closing table writer"))?;
        Ok(())
    }
}

/// One label per entry, looked up from the entry's row
///
/// Only labels of referenced rows reach the column, so only those must be
/// valid UTF-8. Each row is decoded at most once.
fn build_label_column(matrix: &CooView<'_, u32>, labels: &RowLabels<'_>) -> Result<ArrayRef> {
    let mut decoded: Vec<Option<&str>> = vec![None; labels.len()];
    let mut builder = StringBuilder::with_capacity(matrix.nnz(), labels.total_bytes());

    for row in matrix.rows() {
        let row = row as usize;
        let label = match decoded[row] {
            Some(label) => label,
            None => {
                let raw = labels.get(row).ok_or(ArspError::MissingLabels)?;
                let label =
                    std::str::from_utf8(raw).map_err(|_| ExportError::InvalidLabel { row })?;
                decoded[row] = Some(label);
                label
            }
        };
        builder.append_value(label);
    }
    Ok(Arc::new(builder.finish()))
}

fn build_index_column(indices: impl Iterator<Item = i64>, len: usize) -> ArrayRef {
    let mut builder = Int64Builder::with_capacity(len);
    for index in indices {
        builder.append_value(index);
    }
    Arc::new(builder.finish())
}

fn build_value_column(values: &[u32]) -> ArrayRef {
    let mut builder = UInt32Builder::with_capacity(values.len());
    builder.append_slice(values);
    Arc::new(builder.finish())
}

/// Map writer failures: sink I/O errors stay I/O, everything else is a build failure
fn transport_error(step: &'static str) -> impl FnOnce(ArrowError) -> ExportError {
    move |err| match err {
        ArrowError::IoError(_, source) => ExportError::Io {
            operation: step,
            source,
        },
        other => ExportError::Build {
            step,
            source: other,
        },
    }
}
