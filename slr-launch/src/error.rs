/// Error types for loading launch records
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// The dataset could not be parsed as launch records
    #[error("Failed to parse launch CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The dataset file could not be read
    #[error("Failed to read launch dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset parsed but holds no rows, so payload bounds are undefined
    #[error("Launch dataset contains no records")]
    EmptyDataset,

    /// Payload range with low above high (or a NaN bound)
    #[error("Invalid payload range: low {low} exceeds high {high}")]
    InvertedRange { low: f64, high: f64 },
}

/// Type alias for Results using LaunchError
pub type Result<T> = std::result::Result<T, LaunchError>;
