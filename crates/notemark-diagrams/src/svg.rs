//! SVG to pixel rasterization
//!
//! Renders SVG markup into tightly-packed RGB pixels using usvg/resvg
//! with a tiny-skia backing pixmap. The canvas is filled white before
//! rendering so transparent diagram backgrounds stay legible when
//! embedded in a PDF.

use crate::error::{RasterError, Result};
use crate::rasterizer::RasterImage;

/// Rasterize SVG markup at the given scale factor
pub fn rasterize_svg(svg: &[u8], scale: f32) -> Result<RasterImage> {
    let tree = {
        let opts = usvg::Options::default();
        usvg::Tree::from_data(svg, &opts)
            .map_err(|e| RasterError::RenderFailed(format!("SVG parsing failed: {}", e)))?
    };

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        RasterError::RenderFailed(format!("Failed to create pixmap ({}x{})", width, height))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // Flatten premultiplied RGBA into RGB8
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        pixels.push(color.red());
        pixels.push(color.green());
        pixels.push(color.blue());
    }

    RasterImage::new(width, height, pixels)
        .ok_or_else(|| RasterError::RenderFailed("pixel buffer size mismatch".to_string()))
}
