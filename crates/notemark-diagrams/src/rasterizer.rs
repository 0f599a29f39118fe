//! Rasterizer trait and image type
//!
//! The PDF renderer receives its diagram capability through the
//! [`DiagramRasterizer`] trait rather than a module-level singleton, so a
//! different engine (or a test double) can be injected at construction.

use crate::error::Result;

/// Trait for diagram rasterizers
///
/// Implementors turn diagram source text into a bitmap. Any failure is a
/// per-diagram, recoverable condition; callers fall back to a textual
/// rendering of the source.
///
/// # Thread Safety
///
/// Rasterizers must be `Send + Sync` so one instance can serve concurrent
/// export invocations.
pub trait DiagramRasterizer: Send + Sync {
    /// Human-readable name of this rasterizer
    fn name(&self) -> &'static str;

    /// Rasterize diagram source into an RGB image
    fn rasterize(&self, source: &str) -> Result<RasterImage>;
}

/// A rasterized diagram: tightly-packed 8-bit RGB pixels, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// RGB8 pixel data, `width * height * 3` bytes
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create an image, checking that the pixel buffer matches the
    /// dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() == (width as usize) * (height as usize) * 3 {
            Some(Self {
                width,
                height,
                pixels,
            })
        } else {
            None
        }
    }

    /// Height/width ratio, used to preserve aspect when scaling to a
    /// target width
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;

    struct FixedRasterizer;

    impl DiagramRasterizer for FixedRasterizer {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn rasterize(&self, source: &str) -> Result<RasterImage> {
            if source.is_empty() {
                return Err(RasterError::InvalidSource("empty".to_string()));
            }
            Ok(RasterImage::new(2, 1, vec![0; 6]).unwrap())
        }
    }

    #[test]
    fn test_raster_image_size_check() {
        assert!(RasterImage::new(2, 2, vec![0; 12]).is_some());
        assert!(RasterImage::new(2, 2, vec![0; 11]).is_none());
    }

    #[test]
    fn test_aspect_ratio() {
        let image = RasterImage::new(200, 100, vec![0; 200 * 100 * 3]).unwrap();
        assert_eq!(image.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let rasterizer: Box<dyn DiagramRasterizer> = Box::new(FixedRasterizer);
        assert_eq!(rasterizer.name(), "fixed");
        assert!(rasterizer.rasterize("x").is_ok());
        assert!(matches!(
            rasterizer.rasterize(""),
            Err(RasterError::InvalidSource(_))
        ));
    }
}
