//! notemark-ast - document model for note exports
//!
//! This crate defines the two tree shapes the export pipeline works with:
//!
//! - [`EditorNode`]: the raw, DOM-like tree produced by the editing surface
//!   (nested nodes with a type string, attributes, and children).
//! - [`Block`] / [`Inline`]: the normalized, typed content model that both
//!   the markdown serializer and the PDF renderer consume.
//!
//! The reserved [`DIAGRAM_LANGUAGE`] marker identifies code blocks that
//! carry diagram source rather than literal code.

mod block;
mod document;
mod editor;
mod inline;

pub use block::{Block, CodeBlock, DiagramBlock, Heading, List, ListItem, ListKind, Paragraph, Quote};
pub use document::Document;
pub use editor::{EditorNode, Mark, NodeAttrs};
pub use inline::{plain_text, FormatType, Inline};

/// Language tag that reclassifies a code block as diagram source
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
