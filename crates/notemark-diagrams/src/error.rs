//! Error types for diagram rasterization

use thiserror::Error;

/// Errors that can occur while rasterizing a diagram
#[derive(Error, Debug)]
pub enum RasterError {
    /// The diagram source is empty or malformed
    #[error("Invalid diagram source: {0}")]
    InvalidSource(String),

    /// HTTP request to the render server failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The render server rejected the diagram
    #[error("Server error ({status}): {message}")]
    ServerError {
        status: u16,
        message: String,
    },

    /// Local SVG rasterization failed
    #[error("Rasterization failed: {0}")]
    RenderFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, RasterError>;
