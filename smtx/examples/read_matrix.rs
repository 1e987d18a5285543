//! Read the matrices written by `write_matrix` and multiply them

use smtx::{MatrixFile, MatrixSummary, SparseMatrix};
use std::time::Instant;

fn main() -> smtx::Result<()> {
    let left_path = "example_output/matrix_left.txt";
    let right_path = "example_output/matrix_right.txt";

    if !std::path::Path::new(left_path).exists() {
        println!("File '{left_path}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    // Shapes come from the headers alone
    let start = Instant::now();
    let left_file = MatrixFile::open(left_path)?;
    let right_file = MatrixFile::open(right_path)?;
    println!(
        "Headers parsed in {:.3}ms: {} and {}",
        start.elapsed().as_secs_f64() * 1000.0,
        left_file.shape,
        right_file.shape
    );

    let start = Instant::now();
    let left: SparseMatrix = left_file.read_matrix()?;
    let right: SparseMatrix = right_file.read_matrix()?;
    println!("Matrices loaded in {:?}", start.elapsed());

    println!("\n{}", MatrixSummary::new(left_path, &left));
    println!("{}", MatrixSummary::new(right_path, &right));

    let start = Instant::now();
    let product = smtx::multiply(&left, &right)?;
    println!("\nMultiplied in {:?}", start.elapsed());
    println!("{}", MatrixSummary::new("left * right", &product));

    println!("\nFirst row of the product:");
    for (col, value) in product.row(0).into_iter().take(10) {
        println!("  (0, {col}) = {value}");
    }

    MatrixFile::write("example_output/result_multiplication.txt", &product)?;
    Ok(())
}
