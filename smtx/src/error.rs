//! Error type for file and catalog operations

use smtx_core::{MatrixError, Operation};
use std::path::PathBuf;

/// Errors that can occur while reading, writing or selecting matrix files
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file or directory failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The matrix core rejected the input or an operation
    Matrix {
        path: Option<PathBuf>,
        source: MatrixError,
    },
    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The input directory holds no matrix files
    NoMatrixFiles(PathBuf),
    /// A catalog index outside the listed files was selected
    InvalidSelection { index: usize, available: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn matrix(path: impl Into<PathBuf>, source: MatrixError) -> Self {
        Error::Matrix {
            path: Some(path.into()),
            source,
        }
    }

    /// Arithmetic operation the error came from, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Matrix { source, .. } => source.operation(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Matrix {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Error::Matrix { path: None, source } => write!(f, "{source}"),
            #[cfg(feature = "serde")]
            Error::Json { path, source } => write!(f, "{}: {source}", path.display()),
            Error::NoMatrixFiles(dir) => {
                write!(f, "no matrix files found in {}", dir.display())
            }
            Error::InvalidSelection { index, available } => write!(
                f,
                "invalid selection {}: choose a number from 1 to {available}",
                index.saturating_add(1)
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Matrix { source, .. } => Some(source),
            #[cfg(feature = "serde")]
            Error::Json { source, .. } => Some(source),
            Error::NoMatrixFiles(_) | Error::InvalidSelection { .. } => None,
        }
    }
}

impl From<MatrixError> for Error {
    fn from(source: MatrixError) -> Self {
        Error::Matrix { path: None, source }
    }
}

/// Result type for file and catalog operations
pub type Result<T> = std::result::Result<T, Error>;
