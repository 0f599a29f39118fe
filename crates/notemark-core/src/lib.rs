//! notemark-core - note export pipeline
//!
//! This crate contains the document-side half of the export pipeline:
//!
//! 1. **Normalizer** ([`normalize`]) - walks the editor's raw node tree
//!    once and produces the typed block sequence, reclassifying
//!    mermaid-tagged code blocks into diagram blocks. Both output paths
//!    (markdown and PDF) consume this one normalized tree, so the
//!    reclassification can never diverge between them.
//! 2. **Markdown serializer** ([`MarkdownGenerator`]) - converts a
//!    normalized document into markdown text, preserving diagram source
//!    verbatim inside tagged fences.
//! 3. **Filename sanitization** ([`slug`]) - turns note titles into
//!    filesystem-safe output names.

mod markdown;
mod normalize;
pub mod slug;

pub use markdown::{generate_markdown, MarkdownGenerator};
pub use normalize::normalize;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
