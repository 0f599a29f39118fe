//! Error types for PDF rendering

use thiserror::Error;

/// Errors that can occur while rendering a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    /// The underlying PDF surface rejected an operation
    #[error("PDF surface error: {0}")]
    Surface(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for PDF rendering operations
pub type Result<T> = std::result::Result<T, PdfError>;
