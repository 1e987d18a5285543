#![no_std]

//! smtx core - sparse integer matrices
//!
//! This crate provides the sparse matrix type, its arithmetic and the
//! definition of the line-oriented text format it is stored in. It performs
//! no I/O; reading and writing files lives in the `smtx` crate.
//!
//! ```
//! use smtx_core::{format, SparseMatrix};
//!
//! let a: SparseMatrix = format::load("rows=2\ncols=2\n(0,0,1)\n(1,1,2)").unwrap();
//! let b: SparseMatrix = format::load("rows=2\ncols=2\n(0,0,3)\n(0,1,4)").unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(
//!     format::render(&sum),
//!     "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)"
//! );
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod shape;
pub mod traits;
pub mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use format::{load, render};
pub use matrix::SparseMatrix;
pub use ops::{add, multiply, subtract};
pub use shape::{Operation, Shape};
pub use traits::*;
pub use validation::{validate_index, validate_operands};
