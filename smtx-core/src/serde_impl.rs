//! Serde support for [`SparseMatrix`]
//!
//! A matrix serializes as `{ "rows": .., "cols": .., "entries": [[row, col, value], ..] }`
//! with entries in `(row, col)` order. Deserialization goes through
//! [`SparseMatrix::from_entries`], so out-of-range entries are rejected and
//! zeros are dropped.

use alloc::vec::Vec;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{MatrixElement, SparseMatrix};

#[derive(Serialize, Deserialize)]
struct MatrixData<T> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, T)>,
}

impl<T: MatrixElement + Serialize> Serialize for SparseMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixData {
            rows: self.rows(),
            cols: self.cols(),
            entries: self.sorted_entries(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: MatrixElement + Deserialize<'de>> Deserialize<'de> for SparseMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = MatrixData::<T>::deserialize(deserializer)?;
        SparseMatrix::from_entries(data.rows, data.cols, data.entries).map_err(D::Error::custom)
    }
}
