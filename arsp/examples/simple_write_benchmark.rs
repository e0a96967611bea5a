use arsp::{write_columnar_sparse, write_labeled_sparse, write_plain_coo, ExportError};
use std::time::Instant;

fn main() -> Result<(), ExportError> {
    println!("Simple Write Benchmark - All Formats");

    // Test parameters
    let num_rows: i64 = 50_000;
    let num_cols: i64 = 10_000;
    let nnz: i64 = 5_000_000;

    println!("Matrix: {num_rows}x{num_cols} with {nnz} elements");

    // Generate test data
    let data_start = Instant::now();
    let coords: Vec<i64> = (0..nnz)
        .flat_map(|i| [(i * 31) % num_rows, (i * 37) % num_cols])
        .collect();
    let counts: Vec<u32> = (0..nnz).map(|i| (i % 1000) as u32).collect();
    let weights: Vec<f64> = (0..nnz).map(|i| (i as f64 * 0.001) % 1000.0).collect();
    let labels: Vec<Vec<u8>> = (0..num_rows)
        .map(|row| format!("read_{row}").into_bytes())
        .collect();
    let label_refs: Vec<&[u8]> = labels.iter().map(Vec::as_slice).collect();
    println!(
        "Data generation: {:.3}s",
        data_start.elapsed().as_secs_f64()
    );

    let dir = std::env::temp_dir();
    let runs = [
        ("labeled binary", dir.join("benchmark_output.arsn")),
        ("plain binary", dir.join("benchmark_output.arsp")),
        ("columnar", dir.join("benchmark_output.arrow")),
    ];

    for (name, path) in &runs {
        println!("\nWriting {name}...");
        let start = Instant::now();

        let report = match *name {
            "labeled binary" => write_labeled_sparse(
                path, &coords, &counts, &label_refs, nnz, num_rows, num_cols,
            )?,
            "plain binary" => write_plain_coo(path, &coords, &weights, nnz, num_rows, num_cols)?,
            _ => write_columnar_sparse(
                path, &coords, &counts, &label_refs, nnz, num_rows, num_cols,
            )?,
        };

        let duration = start.elapsed();
        let megabytes = report.bytes_written as f64 / (1024.0 * 1024.0);
        println!("Write completed in {:.3}s", duration.as_secs_f64());
        println!("File size: {megabytes:.1} MB");
        println!("Throughput: {:.1} MB/s", megabytes / duration.as_secs_f64());
        println!("Elements/s: {:.0}", nnz as f64 / duration.as_secs_f64());

        std::fs::remove_file(path).map_err(|source| ExportError::Io {
            operation: "removing benchmark output",
            source,
        })?;
    }

    println!("\nBenchmark completed successfully!");

    Ok(())
}
