//! File I/O for matrix text files
//!
//! This module reads and writes sparse matrices in the line-oriented text
//! format defined by `smtx_core::format`.

use crate::{Error, Result};
use smtx_core::format::constants::{COLS_KEY, ROWS_KEY};
use smtx_core::validation::parse_header;
use smtx_core::{MatrixElement, MatrixError, Shape, SparseMatrix};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File handle for a matrix text file
///
/// Opening a file reads only its two header lines, which is enough to
/// check operand compatibility before loading any entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFile {
    pub path: PathBuf,
    pub shape: Shape,
}

impl MatrixFile {
    /// Open an existing matrix file and read its dimensions
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut lines = BufReader::new(file).lines();

        let mut header = |line_number: usize, key: &'static str| -> Result<usize> {
            let line = match lines.next() {
                Some(line) => line.map_err(|e| Error::io(path, e))?,
                None => {
                    let reason = if key == ROWS_KEY {
                        "missing `rows=<integer>` header"
                    } else {
                        "missing `cols=<integer>` header"
                    };
                    return Err(Error::matrix(
                        path,
                        MatrixError::Format {
                            line: 0,
                            content: String::new(),
                            reason,
                        },
                    ));
                }
            };
            parse_header(line_number, &line, key).map_err(|e| Error::matrix(path, e))
        };

        let rows = header(1, ROWS_KEY)?;
        let cols = header(2, COLS_KEY)?;

        Ok(Self {
            path: path.to_path_buf(),
            shape: Shape::new(rows, cols),
        })
    }

    /// Load the full matrix this handle points at
    pub fn read_matrix<T: MatrixElement>(&self) -> Result<SparseMatrix<T>> {
        Self::read(&self.path)
    }

    /// Read and parse a matrix file
    pub fn read<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let matrix = smtx_core::load(&text).map_err(|e| Error::matrix(path, e))?;

        log::info!(
            "read {} matrix with {} non-zeros from {}",
            matrix.shape(),
            matrix.nnz(),
            path.display()
        );
        Ok(matrix)
    }

    /// Write `matrix` in canonical text form, creating parent directories
    ///
    /// The file has no trailing newline.
    pub fn write<T: MatrixElement, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        fs::write(path, smtx_core::render(matrix)).map_err(|e| Error::io(path, e))?;

        log::info!(
            "wrote {} matrix with {} non-zeros to {}",
            matrix.shape(),
            matrix.nnz(),
            path.display()
        );
        Ok(())
    }

    /// Read a matrix stored as JSON
    #[cfg(feature = "serde")]
    pub fn read_json<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a matrix as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn write_json<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + serde::Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        create_parent_dir(path)?;
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        serde_json::to_writer_pretty(file, matrix).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Summary of a matrix as shown by `smtx info`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixSummary {
    pub path: PathBuf,
    pub shape: Shape,
    pub nnz: usize,
    pub density: f64,
    pub element_type: &'static str,
}

impl MatrixSummary {
    pub fn new<T: MatrixElement>(path: impl Into<PathBuf>, matrix: &SparseMatrix<T>) -> Self {
        Self {
            path: path.into(),
            shape: matrix.shape(),
            nnz: matrix.nnz(),
            density: matrix.density(),
            element_type: T::type_name(),
        }
    }
}

impl std::fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix: {}", self.path.display())?;
        writeln!(f, "  Dimensions: {} x {}", self.shape.rows, self.shape.cols)?;
        writeln!(f, "  Non-zero elements: {}", self.nnz)?;
        writeln!(f, "  Density: {:.6}", self.density)?;
        write!(f, "  Element type: {}", self.element_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("matrix1.txt");
        let matrix = SparseMatrix::from_entries(3, 2, [(2, 1, -4), (0, 0, 9)]).unwrap();

        MatrixFile::write(&path, &matrix).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rows=3\ncols=2\n(0, 0, 9)\n(2, 1, -4)"
        );
        assert_eq!(MatrixFile::read::<i64, _>(&path).unwrap(), matrix);

        let handle = MatrixFile::open(&path).unwrap();
        assert_eq!(handle.shape, Shape::new(3, 2));
        assert_eq!(handle.read_matrix::<i64>().unwrap(), matrix);
    }

    #[test]
    fn test_open_reports_bad_header() {
        let dir = tempdir().unwrap();
        let truncated = dir.path().join("matrix_truncated.txt");
        fs::write(&truncated, "rows=2\n").unwrap();
        let garbled = dir.path().join("matrix_garbled.txt");
        fs::write(&garbled, "rows=2\ncolumns=x\n(0,0,1)").unwrap();

        assert!(matches!(
            MatrixFile::open(&truncated),
            Err(Error::Matrix {
                source: MatrixError::Format { line: 0, .. },
                ..
            })
        ));
        assert!(matches!(
            MatrixFile::open(&garbled),
            Err(Error::Matrix {
                source: MatrixError::Format { line: 2, .. },
                ..
            })
        ));
        assert!(matches!(
            MatrixFile::open(dir.path().join("missing.txt")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_read_reports_path_and_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix_bad.txt");
        fs::write(&path, "rows=2\ncols=2\n(0,0)\n").unwrap();

        let err = MatrixFile::read::<i64, _>(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("matrix_bad.txt"));
        assert!(message.contains("line 3"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        let matrix = SparseMatrix::from_entries(2, 4, [(1, 3, 7i64), (0, 2, -1)]).unwrap();

        MatrixFile::write_json(&path, &matrix).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "rows": 2, "cols": 4, "entries": [[0, 2, -1], [1, 3, 7]] })
        );
        assert_eq!(MatrixFile::read_json::<i64, _>(&path).unwrap(), matrix);
    }

    #[test]
    fn test_summary() {
        let matrix = SparseMatrix::from_entries(2, 2, [(0, 0, 1i32)]).unwrap();
        let summary = MatrixSummary::new("m.txt", &matrix);

        assert_eq!(summary.nnz, 1);
        assert_eq!(summary.density, 0.25);
        assert_eq!(summary.element_type, "i32");
        assert!(summary.to_string().contains("Dimensions: 2 x 2"));
    }
}
