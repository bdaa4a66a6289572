use std::path::PathBuf;

/// Errors that can occur while loading or saving a particle dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error during file operations
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A particle identifier cell is not an integer
    #[error("Invalid particle identifier {value:?} on data row {row}")]
    InvalidIdentifier {
        /// 1-based data row (header excluded)
        row: usize,
        /// Offending cell content
        value: String,
    },

    /// A phase cell is neither empty nor an integer
    #[error("Invalid phase {value:?} on data row {row}")]
    InvalidPhase {
        /// 1-based data row (header excluded)
        row: usize,
        /// Offending cell content
        value: String,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::IoError {
            path: path.into(),
            source,
        }
    }
}
