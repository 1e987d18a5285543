//! Naming and location conventions for matrix files

use smtx_core::Operation;
use std::path::{Path, PathBuf};

/// Configuration for scanning input directories and writing results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory scanned for input matrices
    pub input_dir: PathBuf,
    /// Directory result files are written to
    pub output_dir: PathBuf,
    /// Input file names must start with this
    pub prefix: String,
    /// Input file names must end with `.` followed by this
    pub extension: String,
}

impl CatalogConfig {
    /// Create config reading from `input_dir`
    pub fn with_input_dir(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    /// Set the directory results are written to
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the required file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the required file extension, without the dot
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Whether `file_name` names a matrix file under this config
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
            && Path::new(file_name)
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }

    /// File name a result of `operation` is written to
    pub fn result_file_name(&self, operation: Operation) -> String {
        format!("result_{operation}.{}", self.extension)
    }

    /// Full path a result of `operation` is written to
    pub fn result_path(&self, operation: Operation) -> PathBuf {
        self.output_dir.join(self.result_file_name(operation))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("sample_inputs"),
            output_dir: PathBuf::from("results"),
            prefix: "matrix".to_string(),
            extension: "txt".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let config = CatalogConfig::default();

        assert!(config.matches("matrix1.txt"));
        assert!(config.matches("matrix_big.txt"));
        assert!(!config.matches("result_addition.txt"));
        assert!(!config.matches("matrix1.txt.bak"));
        assert!(!config.matches("matrix1"));
        assert!(!config.matches("Matrix1.txt"));
    }

    #[test]
    fn test_builder() {
        let config = CatalogConfig::with_input_dir("in")
            .with_output_dir("out")
            .with_prefix("m")
            .with_extension("smx");

        assert!(config.matches("m7.smx"));
        assert!(!config.matches("m7.txt"));
        assert_eq!(
            config.result_path(Operation::Multiplication),
            PathBuf::from("out").join("result_multiplication.smx")
        );
    }

    #[test]
    fn test_result_file_names() {
        let config = CatalogConfig::default();
        let names: Vec<_> = Operation::ALL
            .iter()
            .map(|&op| config.result_file_name(op))
            .collect();

        assert_eq!(
            names,
            [
                "result_addition.txt",
                "result_subtraction.txt",
                "result_multiplication.txt"
            ]
        );
    }
}
