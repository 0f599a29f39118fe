//! # notemark-diagrams
//!
//! Diagram rasterization for notemark's PDF export. The PDF renderer
//! depends only on the [`DiagramRasterizer`] capability trait; this crate
//! also ships the default implementation, which renders Mermaid source to
//! SVG via a [Kroki](https://kroki.io) server and rasterizes the SVG to
//! RGB pixels locally.
//!
//! Rasterization failures are recoverable by design: the caller is
//! expected to fall back to a textual rendering of the diagram source
//! rather than aborting the export.
//!
//! ## Example
//!
//! ```no_run
//! use notemark_diagrams::{DiagramRasterizer, MermaidRasterizer};
//!
//! let rasterizer = MermaidRasterizer::new();
//! let image = rasterizer.rasterize("graph TD\n  A-->B")?;
//! assert!(image.width > 0 && image.height > 0);
//! # Ok::<(), notemark_diagrams::RasterError>(())
//! ```

mod error;
mod kroki;
mod mermaid;
mod rasterizer;
mod svg;

pub use error::{RasterError, Result};
pub use kroki::{KrokiClient, DEFAULT_KROKI_URL};
pub use mermaid::{MermaidRasterizer, RASTER_SCALE};
pub use rasterizer::{DiagramRasterizer, RasterImage};
pub use svg::rasterize_svg;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
