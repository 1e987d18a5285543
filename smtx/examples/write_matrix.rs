//! Write a pair of large random sparse matrices in the text format

use smtx::{MatrixFile, SparseMatrix};
use std::time::Instant;

fn main() -> smtx::Result<()> {
    println!("Writing sparse matrices...");

    let nrows = 50_000;
    let ncols = 40_000;
    let nnz = 200_000;

    println!("Matrix dimensions: {nrows} x {ncols}, up to {nnz} non-zeros each");

    let start = Instant::now();
    let left = build_demo_matrix(nrows, ncols, nnz, 17)?;
    let right = build_demo_matrix(ncols, nrows, nnz, 29)?;
    println!("Built matrices in {:?}", start.elapsed());

    let start = Instant::now();
    MatrixFile::write("example_output/matrix_left.txt", &left)?;
    MatrixFile::write("example_output/matrix_right.txt", &right)?;
    println!("Matrices written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read them back!");
    Ok(())
}

/// Deterministic pseudo-random matrix, spreading entries with a multiplicative hash
fn build_demo_matrix(
    nrows: usize,
    ncols: usize,
    nnz: usize,
    seed: usize,
) -> smtx::Result<SparseMatrix> {
    let mut matrix: SparseMatrix = SparseMatrix::new(nrows, ncols);
    for i in 0..nnz {
        let h = (i + 1).wrapping_mul(0x9E37_79B9).wrapping_add(seed);
        let row = h % nrows;
        let col = (h / nrows) % ncols;
        let value = (h % 19) as i64 - 9;
        matrix.set_element(row, col, value)?;
    }
    Ok(matrix)
}
