//! Hash-map backed sparse matrix
//!
//! Only non-zero entries are stored, keyed by `(row, col)`. Dimensions are
//! fixed at construction and every write is bounds checked, so the map never
//! holds a zero or an out-of-range coordinate.

use alloc::vec::Vec;
use hashbrown::{hash_map, HashMap};

use crate::shape::Shape;
use crate::validation::validate_index;
use crate::{MatrixElement, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    rows: usize,
    cols: usize,
    /// `entries[(r, c)]` = non-zero value at (`r`, `c`)
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Create a matrix from `(row, col, value)` triples
    ///
    /// Triples are applied in order with [`SparseMatrix::set_element`], so
    /// zeros are not retained and a repeated coordinate keeps its last value.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set_element(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no non-zero entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of cells that are non-zero, 0.0 for a matrix with no cells
    pub fn density(&self) -> f64 {
        match self.shape().cell_count() {
            Some(0) => 0.0,
            Some(cells) => self.nnz() as f64 / cells as f64,
            None => self.nnz() as f64 / (self.rows as f64 * self.cols as f64),
        }
    }

    /// Value at `(row, col)`, zero when nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO)
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Store `value` at `(row, col)`; a zero removes the entry
    ///
    /// Fails without modifying the matrix if the coordinate is out of bounds.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_index(self.shape(), row, col)?;

        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterate over the non-zero entries in unspecified order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.entries.iter(),
        }
    }

    /// Non-zero entries as `(row, col, value)`, sorted by `(row, col)`
    pub fn sorted_entries(&self) -> Vec<(usize, usize, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(row, col, _)| (row, col));
        entries
    }

    /// Non-zero entries of one row as `(col, value)`, sorted by column
    pub fn row(&self, row: usize) -> Vec<(usize, T)> {
        let mut values: Vec<_> = self
            .iter()
            .filter(|&(r, _, _)| r == row)
            .map(|(_, col, value)| (col, value))
            .collect();
        values.sort_unstable_by_key(|&(col, _)| col);
        values
    }
}

impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::format::write_matrix(f, self)
    }
}

impl<T: MatrixElement> core::str::FromStr for SparseMatrix<T> {
    type Err = crate::MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        crate::format::load(s)
    }
}

pub struct Iter<'a, T> {
    iter: hash_map::Iter<'a, (usize, usize), T>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&(row, col), &value)| (row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Copy> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: MatrixElement> IntoIterator for &'a SparseMatrix<T> {
    type Item = (usize, usize, T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;
    use alloc::vec;

    #[test]
    fn test_new_is_empty() {
        let matrix: SparseMatrix = SparseMatrix::new(3, 4);

        assert_eq!(matrix.shape(), Shape::new(3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.get_element(2, 3), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut matrix: SparseMatrix = SparseMatrix::new(2, 2);

        matrix.set_element(1, 0, -3).unwrap();
        assert_eq!(matrix.get_element(1, 0), -3);
        assert!(matrix.contains(1, 0));

        matrix.set_element(1, 0, 0).unwrap();
        assert_eq!(matrix.get_element(1, 0), 0);
        assert!(!matrix.contains(1, 0));
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once: SparseMatrix = SparseMatrix::new(2, 2);
        once.set_element(0, 1, 5).unwrap();

        let mut twice: SparseMatrix = SparseMatrix::new(2, 2);
        twice.set_element(0, 1, 5).unwrap();
        twice.set_element(0, 1, 5).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.nnz(), 1);
    }

    #[test]
    fn test_zero_on_absent_entry_is_noop() {
        let mut matrix: SparseMatrix = SparseMatrix::new(2, 2);
        matrix.set_element(0, 0, 0).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_out_of_bounds_write_is_rejected() {
        let mut matrix = SparseMatrix::from_entries(2, 3, [(1, 2, 4)]).unwrap();
        let before = matrix.clone();

        assert_eq!(
            matrix.set_element(2, 0, 1),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                shape: Shape::new(2, 3)
            })
        );
        assert!(matrix.set_element(0, 3, 1).is_err());
        assert_eq!(matrix, before);

        // Reads outside the shape are simply zero
        assert_eq!(matrix.get_element(10, 10), 0);
    }

    #[test]
    fn test_from_entries_applies_set_rule() {
        let matrix =
            SparseMatrix::from_entries(3, 3, [(0, 0, 1), (1, 1, 0), (2, 2, 4), (2, 2, 6)])
                .unwrap();

        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get_element(2, 2), 6);
        assert!(!matrix.contains(1, 1));

        assert!(SparseMatrix::from_entries(1, 1, [(0, 1, 1i64)]).is_err());
    }

    #[test]
    fn test_nnz_tracks_net_non_zero_coordinates() {
        let mut matrix: SparseMatrix = SparseMatrix::new(4, 4);
        let writes = [(0, 0, 1), (0, 0, 2), (1, 1, 3), (0, 0, 0), (3, 3, -1)];
        for (row, col, value) in writes {
            matrix.set_element(row, col, value).unwrap();
        }

        let non_zero_writes = writes.iter().filter(|w| w.2 != 0).count();
        assert!(matrix.nnz() <= non_zero_writes);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_sorted_entries_and_row() {
        let matrix =
            SparseMatrix::from_entries(3, 3, [(2, 1, 5), (0, 2, 3), (2, 0, 4), (0, 0, 1)])
                .unwrap();

        assert_eq!(
            matrix.sorted_entries(),
            vec![(0, 0, 1), (0, 2, 3), (2, 0, 4), (2, 1, 5)]
        );
        assert_eq!(matrix.row(2), vec![(0, 4), (1, 5)]);
        assert!(matrix.row(1).is_empty());
        assert_eq!(matrix.iter().len(), 4);
    }

    #[test]
    fn test_density() {
        let matrix = SparseMatrix::from_entries(2, 5, [(0, 0, 1), (1, 4, 1)]).unwrap();
        assert_eq!(matrix.density(), 0.2);

        let empty: SparseMatrix = SparseMatrix::new(0, 0);
        assert_eq!(empty.density(), 0.0);
    }

    #[test]
    fn test_from_str() {
        let matrix: SparseMatrix<i32> = "rows=1\ncols=2\n(0,1,9)".parse().unwrap();
        assert_eq!(matrix.get_element(0, 1), 9);
    }
}
