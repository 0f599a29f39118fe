//! Kroki rendering client
//!
//! Thin client for the [Kroki](https://kroki.io) service, which turns
//! Mermaid source into SVG markup. Only the synchronous POST endpoint is
//! used during export; the compressed GET URL helper exists for embedding
//! and debugging.

use std::io::Write;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use reqwest::blocking::Client;

use crate::error::{RasterError, Result};

/// Default Kroki server URL
pub const DEFAULT_KROKI_URL: &str = "https://kroki.io";

/// Diagram type segment in Kroki URLs
const DIAGRAM_ENDPOINT: &str = "mermaid";

/// Client for rendering Mermaid diagrams via Kroki
#[derive(Debug, Clone)]
pub struct KrokiClient {
    /// Base URL of the Kroki server
    base_url: String,
    /// HTTP client
    client: Client,
}

impl Default for KrokiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KrokiClient {
    /// Create a new client with the default Kroki server
    pub fn new() -> Self {
        Self::with_url(DEFAULT_KROKI_URL)
    }

    /// Create a client with a custom Kroki server URL
    pub fn with_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render Mermaid source to SVG bytes
    pub fn render_svg(&self, source: &str) -> Result<Vec<u8>> {
        let url = format!("{}/{}/svg", self.base_url, DIAGRAM_ENDPOINT);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "text/plain")
            .body(source.to_string())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RasterError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Generate a shareable URL for a diagram (without rendering)
    pub fn diagram_url(&self, source: &str) -> Result<String> {
        let encoded = Self::encode_source(source)?;
        Ok(format!(
            "{}/{}/svg/{}",
            self.base_url, DIAGRAM_ENDPOINT, encoded
        ))
    }

    /// Encode diagram source for use in URLs (deflate + url-safe base64)
    pub fn encode_source(source: &str) -> Result<String> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(source.as_bytes())
            .map_err(|e| RasterError::InvalidSource(e.to_string()))?;
        let compressed = encoder
            .finish()
            .map_err(|e| RasterError::InvalidSource(e.to_string()))?;

        Ok(URL_SAFE_NO_PAD.encode(&compressed))
    }
}
