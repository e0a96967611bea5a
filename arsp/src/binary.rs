//! Custom binary encoders for the "ARSN" and "ARSP" streams
//!
//! Both streams are a header followed by unpadded fixed-width arrays in
//! native byte order:
//!
//! ```text
//! ARSN: magic | nnz | num_rows | num_cols | total_label_bytes
//!       | label_lengths[num_rows] | label_bytes | (row, col)[nnz] | u32[nnz]
//! ARSP: magic | nnz | num_rows | num_cols | (row, col)[nnz] | f64[nnz]
//! ```

use crate::codec::FieldWriter;
use crate::encoder::{OutputFormat, SparseEncoder};
use crate::error::Result;
use arsp_core::{ArspError, CooView, EncodedLayout, SparseMatrix, Variant};
use std::io::Write;
use tracing::debug;

/// Encoder for label-bearing sparse data with u32 values
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledBinaryEncoder;

impl SparseEncoder for LabeledBinaryEncoder {
    type Element = u32;

    fn format(&self) -> OutputFormat {
        OutputFormat::LabeledBinary
    }

    fn encode<W: Write>(&self, matrix: &CooView<'_, u32>, sink: &mut W) -> Result<()> {
        let labels = matrix.require_labels()?;
        let layout = EncodedLayout::labeled(matrix.nnz(), matrix.num_rows(), labels.total_bytes())?;
        let total_label_bytes =
            i64::try_from(labels.total_bytes()).map_err(|_| ArspError::SizeOverflow)?;

        let mut out = FieldWriter::new(sink);
        out.write_bytes(&matrix.header(Variant::Labeled).to_ne_bytes(), "writing header")?;
        out.write_i64(total_label_bytes, "writing label byte total")?;
        out.write_i64_iter(
            labels.iter().map(|label| label.len() as i64),
            "writing label lengths",
        )?;
        for label in labels.iter() {
            out.write_bytes(label, "writing label bytes")?;
        }
        out.write_slice(matrix.coords(), "writing coordinates")?;
        out.write_slice(matrix.values(), "writing values")?;

        debug_assert_eq!(out.bytes_written(), layout.total_size as u64);
        debug!(
            nnz = matrix.nnz(),
            label_bytes = labels.total_bytes(),
            bytes = out.bytes_written(),
            "encoded ARSN stream"
        );
        Ok(())
    }
}

/// Encoder for plain COO data with f64 values
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBinaryEncoder;

impl SparseEncoder for PlainBinaryEncoder {
    type Element = f64;

    fn format(&self) -> OutputFormat {
        OutputFormat::PlainBinary
    }

    fn encode<W: Write>(&self, matrix: &CooView<'_, f64>, sink: &mut W) -> Result<()> {
        let layout = EncodedLayout::plain(matrix.nnz())?;

        let mut out = FieldWriter::new(sink);
        out.write_bytes(&matrix.header(Variant::Plain).to_ne_bytes(), "writing header")?;
        out.write_slice(matrix.coords(), "writing coordinates")?;
        out.write_slice(matrix.values(), "writing values")?;

        debug_assert_eq!(out.bytes_written(), layout.total_size as u64);
        debug!(nnz = matrix.nnz(), bytes = out.bytes_written(), "encoded ARSP stream");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use arsp_core::RowLabels;

    fn encode_to_vec<E: SparseEncoder>(encoder: E, matrix: &CooView<'_, E::Element>) -> Vec<u8> {
        let mut buf = Vec::new();
        encoder.encode(matrix, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_single_entry_labeled_stream() {
        let raw: [&[u8]; 1] = [b"read_A"];
        let matrix = CooView::new(1, 1, 1, &[0, 0], &[42u32])
            .unwrap()
            .with_row_labels(RowLabels::new(&raw).unwrap())
            .unwrap();

        let bytes = encode_to_vec(LabeledBinaryEncoder, &matrix);

        let mut expected = b"ARSN".to_vec();
        for field in [1i64, 1, 1, 6, 6] {
            expected.extend_from_slice(&field.to_ne_bytes());
        }
        expected.extend_from_slice(b"read_A");
        expected.extend_from_slice(&0i64.to_ne_bytes());
        expected.extend_from_slice(&0i64.to_ne_bytes());
        expected.extend_from_slice(&42u32.to_ne_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_plain_stream_interleaves_pairs() {
        let matrix = CooView::new(2, 3, 4, &[2, 3, 0, 1], &[1.5f64, -0.25]).unwrap();
        let bytes = encode_to_vec(PlainBinaryEncoder, &matrix);

        assert_eq!(bytes.len(), 28 + 32 + 16);
        assert_eq!(&bytes[0..4], b"ARSP");
        let pairs: Vec<i64> = bytes[28..60]
            .chunks_exact(8)
            .map(|c| i64::from_ne_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(pairs, vec![2, 3, 0, 1]);
        assert_eq!(&bytes[60..68], &1.5f64.to_ne_bytes());
        assert_eq!(&bytes[68..76], &(-0.25f64).to_ne_bytes());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let raw: [&[u8]; 3] = [b"alpha", b"", b"gamma"];
        let coords = [2, 0, 0, 1, 2, 0];
        let values = [7u32, 8, 9];
        let matrix = CooView::new(3, 3, 2, &coords, &values)
            .unwrap()
            .with_row_labels(RowLabels::new(&raw).unwrap())
            .unwrap();

        assert_eq!(
            encode_to_vec(LabeledBinaryEncoder, &matrix),
            encode_to_vec(LabeledBinaryEncoder, &matrix)
        );
    }

    #[test]
    fn test_empty_streams_are_header_only() {
        let labeled = CooView::<u32>::new(0, 0, 0, &[], &[])
            .unwrap()
            .with_row_labels(RowLabels::new(&[]).unwrap())
            .unwrap();
        let bytes = encode_to_vec(LabeledBinaryEncoder, &labeled);
        assert_eq!(bytes.len(), 36);
        assert_eq!(&bytes[28..36], &0i64.to_ne_bytes());

        let plain = CooView::<f64>::new(0, 0, 0, &[], &[]).unwrap();
        assert_eq!(encode_to_vec(PlainBinaryEncoder, &plain).len(), 28);
    }

    #[test]
    fn test_labeled_requires_labels() {
        let matrix = CooView::new(1, 1, 1, &[0, 0], &[1u32]).unwrap();
        let err = LabeledBinaryEncoder
            .encode(&matrix, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }
}
