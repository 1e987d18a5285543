//! Directory catalog of matrix files
//!
//! A catalog lists the matrix files of an input directory together with
//! their dimensions, and recommends pairs of files that can be combined by
//! a given operation.

use crate::file_io::MatrixFile;
use crate::{CatalogConfig, Error, Result};
use smtx_core::{MatrixElement, Operation, Shape, SparseMatrix};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One matrix file found in the input directory
#[derive(Debug)]
pub struct CatalogEntry {
    pub name: String,
    pub path: PathBuf,
    /// Header of the file, or why it could not be read
    pub file: Result<MatrixFile>,
}

impl CatalogEntry {
    /// Dimensions of the matrix, `None` if its header is unreadable
    pub fn shape(&self) -> Option<Shape> {
        self.file.as_ref().ok().map(|file| file.shape)
    }
}

/// Matrix files of one directory, sorted by name
#[derive(Debug)]
pub struct Catalog {
    dir: PathBuf,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Scan `dir` for files matching `config`
    ///
    /// Files whose header cannot be read are kept with their error so that
    /// they can be reported. An empty result is an error.
    pub fn scan<P: AsRef<Path>>(dir: P, config: &CatalogConfig) -> Result<Self> {
        let dir = dir.as_ref();
        let mut names = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let dir_entry = dir_entry.map_err(|e| Error::io(dir, e))?;
            let Ok(name) = dir_entry.file_name().into_string() else {
                log::warn!("skipping non UTF-8 file name in {}", dir.display());
                continue;
            };
            if config.matches(&name) && dir_entry.path().is_file() {
                names.push(name);
            }
        }

        if names.is_empty() {
            return Err(Error::NoMatrixFiles(dir.to_path_buf()));
        }
        names.sort();

        let entries = names
            .into_iter()
            .map(|name| {
                let path = dir.join(&name);
                let file = MatrixFile::open(&path);
                if let Err(e) = &file {
                    log::warn!("cannot read header of {name}: {e}");
                }
                CatalogEntry { name, path, file }
            })
            .collect::<Vec<_>>();

        log::debug!("found {} matrix files in {}", entries.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at 0-based `index`
    pub fn select(&self, index: usize) -> Result<&CatalogEntry> {
        self.entries.get(index).ok_or(Error::InvalidSelection {
            index,
            available: self.entries.len(),
        })
    }

    /// Load the full matrix at 0-based `index`
    pub fn load<T: MatrixElement>(&self, index: usize) -> Result<SparseMatrix<T>> {
        let entry = self.select(index)?;
        match &entry.file {
            Ok(file) => file.read_matrix(),
            // Re-read so the caller gets the parse error
            Err(_) => MatrixFile::read(&entry.path),
        }
    }

    /// Ordered pairs `(i, j)`, `i != j`, whose matrices can be combined by `operation`
    pub fn recommend(&self, operation: Operation) -> Vec<(usize, usize)> {
        let shapes: Vec<_> = self.entries.iter().map(CatalogEntry::shape).collect();
        let mut pairs = Vec::new();
        for (i, left) in shapes.iter().enumerate() {
            for (j, right) in shapes.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let (Some(left), Some(right)) = (left, right) {
                    if left.result_of(operation, right).is_some() {
                        pairs.push((i, j));
                    }
                }
            }
        }
        pairs
    }

    /// Indices taking part in at least one recommended pair
    pub fn recommended_indices(&self, operation: Operation) -> BTreeSet<usize> {
        self.recommend(operation)
            .into_iter()
            .flat_map(|(i, j)| [i, j])
            .collect()
    }
}
