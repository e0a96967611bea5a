//! Test-only decoder for ARSN / ARSP streams

#![allow(dead_code)]

use memmap2::Mmap;
use rand::Rng;
use std::fs::File;
use std::path::Path;

/// Memory-map a finished export
pub fn map_file(path: &Path) -> Mmap {
    let file = File::open(path).expect("open export");
    unsafe { Mmap::map(&file).expect("map export") }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> &'a [u8] {
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        slice
    }

    fn i64(&mut self) -> i64 {
        i64::from_ne_bytes(self.take(8).try_into().unwrap())
    }

    fn u32(&mut self) -> u32 {
        u32::from_ne_bytes(self.take(4).try_into().unwrap())
    }

    fn f64(&mut self) -> f64 {
        f64::from_ne_bytes(self.take(8).try_into().unwrap())
    }
}

#[derive(Debug, PartialEq)]
pub struct DecodedLabeled {
    pub nnz: i64,
    pub num_rows: i64,
    pub num_cols: i64,
    pub total_label_bytes: i64,
    pub labels: Vec<Vec<u8>>,
    pub coords: Vec<i64>,
    pub values: Vec<u32>,
}

#[derive(Debug, PartialEq)]
pub struct DecodedPlain {
    pub nnz: i64,
    pub num_rows: i64,
    pub num_cols: i64,
    pub coords: Vec<i64>,
    pub values: Vec<f64>,
}

pub fn decode_labeled(bytes: &[u8]) -> DecodedLabeled {
    let mut cur = Cursor { bytes, pos: 0 };
    assert_eq!(cur.take(4), b"ARSN");
    let (nnz, num_rows, num_cols) = (cur.i64(), cur.i64(), cur.i64());
    let total_label_bytes = cur.i64();
    let lengths: Vec<i64> = (0..num_rows).map(|_| cur.i64()).collect();
    let labels = lengths
        .iter()
        .map(|&len| cur.take(len as usize).to_vec())
        .collect();
    let coords = (0..nnz * 2).map(|_| cur.i64()).collect();
    let values = (0..nnz).map(|_| cur.u32()).collect();
    assert_eq!(cur.pos, bytes.len(), "trailing bytes after ARSN stream");

    DecodedLabeled {
        nnz,
        num_rows,
        num_cols,
        total_label_bytes,
        labels,
        coords,
        values,
    }
}

pub fn decode_plain(bytes: &[u8]) -> DecodedPlain {
    let mut cur = Cursor { bytes, pos: 0 };
    assert_eq!(cur.take(4), b"ARSP");
    let (nnz, num_rows, num_cols) = (cur.i64(), cur.i64(), cur.i64());
    let coords = (0..nnz * 2).map(|_| cur.i64()).collect();
    let values = (0..nnz).map(|_| cur.f64()).collect();
    assert_eq!(cur.pos, bytes.len(), "trailing bytes after ARSP stream");

    DecodedPlain {
        nnz,
        num_rows,
        num_cols,
        coords,
        values,
    }
}

/// Random in-bounds labeled matrix with u32 values
pub struct RandomMatrix {
    pub num_rows: i64,
    pub num_cols: i64,
    pub coords: Vec<i64>,
    pub values: Vec<u32>,
    pub labels: Vec<Vec<u8>>,
}

impl RandomMatrix {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let num_rows = rng.gen_range(1..40);
        let num_cols = rng.gen_range(1..40);
        let nnz = rng.gen_range(0..200);

        let mut coords = Vec::with_capacity(nnz * 2);
        for _ in 0..nnz {
            coords.push(rng.gen_range(0..num_rows));
            coords.push(rng.gen_range(0..num_cols));
        }
        let values = (0..nnz).map(|_| rng.gen()).collect();
        let labels = (0..num_rows)
            .map(|row| {
                let suffix_len = rng.gen_range(0..12);
                let mut label = format!("read_{row}_").into_bytes();
                label.extend((0..suffix_len).map(|_| rng.gen_range(b'a'..=b'z')));
                label
            })
            .collect();

        Self {
            num_rows,
            num_cols,
            coords,
            values,
            labels,
        }
    }

    pub fn nnz(&self) -> i64 {
        self.values.len() as i64
    }

    pub fn label_refs(&self) -> Vec<&[u8]> {
        self.labels.iter().map(Vec::as_slice).collect()
    }
}
