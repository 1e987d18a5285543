//! smtx - sparse integer matrices stored as text files
//!
//! This library reads and writes sparse matrices in a line-oriented text
//! format, scans directories of matrix files and recommends which of them
//! can be added, subtracted or multiplied.
//!
//! ## Architecture
//!
//! smtx keeps the matrix itself separate from I/O:
//!
//! - **smtx-core**: the sparse matrix type, its arithmetic and the text format (no I/O)
//! - **smtx**: file access, directory catalog and the `smtx` command-line tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{MatrixFile, SparseMatrix};
//!
//! fn example() -> smtx::Result<()> {
//!     let a: SparseMatrix = MatrixFile::read("sample_inputs/matrix1.txt")?;
//!     let b: SparseMatrix = MatrixFile::read("sample_inputs/matrix3.txt")?;
//!
//!     let product = smtx::multiply(&a, &b)?;
//!     println!("{product}");
//!     MatrixFile::write("results/result_multiplication.txt", &product)?;
//!     Ok(())
//! }
//! ```

// Re-export the matrix core
pub use smtx_core::{
    add, format, load, multiply, render, subtract, MatrixElement, MatrixError, Operation, Shape,
    SparseMatrix,
};

pub mod catalog;
pub mod config;
pub mod error;
pub mod file_io;

pub use catalog::{Catalog, CatalogEntry};
pub use config::CatalogConfig;
pub use error::{Error, Result};
pub use file_io::{MatrixFile, MatrixSummary};
