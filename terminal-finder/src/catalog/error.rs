//! Catalog error types.

/// Errors that can occur when loading or saving a terminal catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV could not be parsed or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Error returned when choosing among matched terminals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The index is not a position in the candidate list
    #[error("selection {index} is out of range: {len} candidates")]
    OutOfRange { index: usize, len: usize },
}
