//! # notemark-pdf
//!
//! Paginated PDF rendering for note exports. Takes the normalized
//! [`notemark_ast::Document`] tree and lays it out on A4 portrait pages
//! with a title banner, per-block styling, page-number footers, and
//! embedded diagram images.
//!
//! Layout is deterministic: line breaking uses fixed per-face glyph
//! width estimates, so the same document always produces the same
//! pagination.
//!
//! ## Example
//!
//! ```
//! use notemark_ast::{Block, Document, Inline, Paragraph};
//! use notemark_pdf::render_pdf;
//!
//! let mut doc = Document::new("My Note");
//! doc.push(Block::Paragraph(Paragraph::new(vec![Inline::text("Hello")])));
//! let bytes = render_pdf(&doc)?;
//! assert!(bytes.starts_with(b"%PDF"));
//! # Ok::<(), notemark_pdf::PdfError>(())
//! ```

mod cursor;
mod error;
mod renderer;
mod wrap;

pub use cursor::{PageCursor, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
pub use error::{PdfError, Result};
pub use renderer::{render_pdf, PdfRenderer};
pub use wrap::{char_width_mm, text_width_mm, wrap_text, FontFace};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
