//! Error types for the inventory optimizer
//!
//! Every failure is local and user-visible; none of them stop the app.

use thiserror::Error;

/// Main error type for inventory optimizer operations
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// CSV reading error from polars
    #[error("CSV processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Required column missing from the header row
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Nothing to read at all (no header row)
    #[error("File is empty")]
    EmptyFile,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for inventory optimizer operations
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// UI-friendly error message formatting
impl OptimizerError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            OptimizerError::FileIo(e) => format!("File error: {}", e),
            OptimizerError::Polars(e) => format!("Could not read CSV: {}", e),
            OptimizerError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}' (expected .csv)", extension)
            }
            OptimizerError::ColumnNotFound { column } => {
                format!("Required column '{}' is missing from the header row", column)
            }
            OptimizerError::EmptyFile => "The file is empty".to_string(),
            OptimizerError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error banner
    pub fn title(&self) -> &'static str {
        match self {
            OptimizerError::FileIo(_) => "File Error",
            OptimizerError::Polars(_) => "CSV Error",
            OptimizerError::UnsupportedFormat { .. } => "Unsupported Format",
            OptimizerError::ColumnNotFound { .. } => "Column Not Found",
            OptimizerError::EmptyFile => "Empty File",
            OptimizerError::Json(_) => "JSON Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OptimizerError::ColumnNotFound {
            column: "orders".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Required column 'orders' is missing from the header row"
        );
        assert_eq!(err.title(), "Column Not Found");

        let err = OptimizerError::UnsupportedFormat {
            extension: "xlsx".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Unsupported file format: '.xlsx' (expected .csv)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: OptimizerError = io_err.into();
        assert!(matches!(err, OptimizerError::FileIo(_)));
        assert_eq!(err.title(), "File Error");
    }
}
