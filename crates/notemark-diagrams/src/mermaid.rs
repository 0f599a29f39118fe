//! Default Mermaid rasterizer
//!
//! Combines the Kroki client with local SVG rasterization. Rendering
//! happens at 2x scale so diagrams stay crisp after being scaled down to
//! the PDF content width.

use crate::error::{RasterError, Result};
use crate::kroki::KrokiClient;
use crate::rasterizer::{DiagramRasterizer, RasterImage};
use crate::svg::rasterize_svg;

/// Scale factor applied when rasterizing diagram SVG
pub const RASTER_SCALE: f32 = 2.0;

/// Mermaid rasterizer backed by a Kroki server
pub struct MermaidRasterizer {
    client: KrokiClient,
}

impl Default for MermaidRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MermaidRasterizer {
    /// Create a rasterizer pointed at the default Kroki server
    pub fn new() -> Self {
        Self {
            client: KrokiClient::new(),
        }
    }

    /// Create a rasterizer with a custom Kroki server URL
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            client: KrokiClient::with_url(base_url),
        }
    }
}

impl DiagramRasterizer for MermaidRasterizer {
    fn name(&self) -> &'static str {
        "kroki-mermaid"
    }

    fn rasterize(&self, source: &str) -> Result<RasterImage> {
        let source = source.trim();
        if source.is_empty() {
            return Err(RasterError::InvalidSource(
                "Empty diagram source".to_string(),
            ));
        }

        let svg = self.client.render_svg(source)?;
        log::debug!(
            "rasterizing mermaid diagram ({} bytes of SVG)",
            svg.len()
        );
        rasterize_svg(&svg, RASTER_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let rasterizer = MermaidRasterizer::new();
        assert_eq!(rasterizer.name(), "kroki-mermaid");
    }

    #[test]
    fn test_empty_source_rejected_without_network() {
        let rasterizer = MermaidRasterizer::with_url("http://localhost:1");
        let result = rasterizer.rasterize("  \n ");
        assert!(matches!(result, Err(RasterError::InvalidSource(_))));
    }
}
