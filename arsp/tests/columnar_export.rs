//! End-to-end tests for the Arrow IPC table export
#![cfg(feature = "columnar")]

mod common;

use arrow::array::{Array, Int64Array, StringArray, UInt32Array};
use arrow::ipc::reader::FileReader;
use arrow::record_batch::RecordBatch;
use arsp::{
    sparse_schema, write_columnar_sparse, write_columnar_sparse_with_options, ErrorKind,
    ExportOptions, OutputFormat,
};
use common::RandomMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::path::Path;

fn read_table(path: &Path) -> Vec<RecordBatch> {
    let reader = FileReader::try_new(File::open(path).unwrap(), None).unwrap();
    assert_eq!(reader.schema(), sparse_schema());
    reader.collect::<Result<Vec<_>, _>>().unwrap()
}

fn column<T: 'static>(batch: &RecordBatch, index: usize) -> &T {
    batch.column(index).as_any().downcast_ref::<T>().unwrap()
}

#[test]
fn labels_repeat_per_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counts.arrow");
    let labels: [&[u8]; 2] = [b"read_0", b"read_1"];

    let report =
        write_columnar_sparse(&path, &[0, 5, 0, 6, 1, 2], &[10, 20, 30], &labels, 3, 2, 7)
            .unwrap();
    assert_eq!(report.format, OutputFormat::Columnar);
    assert_eq!(report.bytes_written, std::fs::metadata(&path).unwrap().len());

    let batches = read_table(&path);
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];

    let read_ids = column::<StringArray>(batch, 0);
    assert_eq!(
        read_ids.iter().flatten().collect::<Vec<_>>(),
        vec!["read_0", "read_0", "read_1"]
    );
    assert_eq!(column::<Int64Array>(batch, 1).values().to_vec(), vec![0, 0, 1]);
    assert_eq!(column::<Int64Array>(batch, 2).values().to_vec(), vec![5, 6, 2]);
    assert_eq!(column::<UInt32Array>(batch, 3).values().to_vec(), vec![10, 20, 30]);
}

#[test]
fn random_tables_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xC0_1A_BB);
    let dir = tempfile::tempdir().unwrap();

    for case in 0..10 {
        let m = RandomMatrix::generate(&mut rng);
        let labels = m.label_refs();
        let path = dir.path().join(format!("case_{case}.arrow"));

        write_columnar_sparse(&path, &m.coords, &m.values, &labels, m.nnz(), m.num_rows, m.num_cols)
            .unwrap();

        let batches = read_table(&path);
        let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
        assert_eq!(total_rows, m.values.len());

        let mut read_ids = Vec::new();
        let mut coords = Vec::new();
        let mut values = Vec::new();
        for batch in &batches {
            let rows = column::<Int64Array>(batch, 1);
            let cols = column::<Int64Array>(batch, 2);
            for i in 0..batch.num_rows() {
                coords.extend([rows.value(i), cols.value(i)]);
            }
            read_ids.extend(
                column::<StringArray>(batch, 0)
                    .iter()
                    .flatten()
                    .map(|s| s.as_bytes().to_vec()),
            );
            values.extend_from_slice(column::<UInt32Array>(batch, 3).values());
        }

        assert_eq!(coords, m.coords);
        assert_eq!(values, m.values);
        let expected: Vec<Vec<u8>> = m
            .coords
            .chunks_exact(2)
            .map(|pair| m.labels[pair[0] as usize].clone())
            .collect();
        assert_eq!(read_ids, expected);
    }
}

#[test]
fn empty_matrix_writes_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.arrow");

    write_columnar_sparse(&path, &[], &[], &[], 0, 0, 0).unwrap();

    let batches = read_table(&path);
    let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    assert_eq!(total_rows, 0);
}

#[test]
fn invalid_label_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.arrow");
    let labels: [&[u8]; 1] = [&[0x80, 0x81]];

    let err = write_columnar_sparse(&path, &[0, 0], &[1], &labels, 1, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Build);
    assert!(!path.exists());
}

#[test]
fn label_of_empty_row_need_not_be_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse_rows.arrow");
    let labels: [&[u8]; 2] = [b"ok", &[0xc3]];

    write_columnar_sparse(&path, &[0, 0], &[1], &labels, 1, 2, 1).unwrap();

    let batches = read_table(&path);
    let read_ids = column::<StringArray>(&batches[0], 0);
    assert_eq!(read_ids.iter().flatten().collect::<Vec<_>>(), vec!["ok"]);
}

#[test]
fn out_of_bounds_row_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oob.arrow");
    let labels: [&[u8]; 1] = [b"r"];

    let err = write_columnar_sparse(&path, &[1, 0], &[1], &labels, 1, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
    assert!(!path.exists());
}

#[test]
fn custom_alignment_still_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aligned.arrow");
    let labels: [&[u8]; 1] = [b"only"];
    let options = ExportOptions::default()
        .with_ipc_alignment(8)
        .with_sync_on_commit(false);

    write_columnar_sparse_with_options(&path, &[0, 3], &[9], &labels, 1, 1, 4, &options).unwrap();

    let batches = read_table(&path);
    assert_eq!(column::<UInt32Array>(&batches[0], 3).value(0), 9);
}
