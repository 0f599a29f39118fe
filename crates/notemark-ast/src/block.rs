//! Block-level elements for document structure
//!
//! This module defines the normalized block kinds the export pipeline
//! dispatches on: paragraphs, headings, lists, quotes, code, diagrams,
//! and horizontal rules. Container blocks (list items, quotes) keep their
//! nested content as block sub-sequences rather than flattened text.

use serde::{Deserialize, Serialize};

use crate::inline::Inline;

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A section heading (levels 1-3)
    Heading(Heading),
    /// A bulleted or numbered list
    List(List),
    /// A block quote
    Quote(Quote),
    /// A literal code block
    Code(CodeBlock),
    /// A diagram-as-code block (reclassified from code by the normalizer)
    Diagram(DiagramBlock),
    /// A horizontal rule
    Rule,
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content within the paragraph
    pub inlines: Vec<Inline>,
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, clamped to 1-3
    pub level: u8,
    /// Heading text content
    pub inlines: Vec<Inline>,
}

/// A list (bulleted or numbered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Kind of list marker
    pub kind: ListKind,
    /// List items
    pub items: Vec<ListItem>,
}

/// List marker variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Bullet markers
    Bulleted,
    /// Ordinal markers (1., 2., ...)
    Numbered,
}

/// A single list item
///
/// Item content is a block sub-sequence so that nested lists and
/// multi-paragraph items survive normalization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    pub blocks: Vec<Block>,
}

/// A block quote
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Quoted content
    pub blocks: Vec<Block>,
}

/// A literal code block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language tag, if any
    pub language: Option<String>,
    /// The literal content
    pub content: String,
}

/// A diagram block carrying raw diagram source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramBlock {
    /// Trimmed diagram source text
    pub source: String,
}

impl Heading {
    /// Create a heading, clamping the level into the supported 1-3 range
    pub fn new(level: u8, inlines: Vec<Inline>) -> Self {
        Self {
            level: level.clamp(1, 3),
            inlines,
        }
    }
}

impl Paragraph {
    /// Create a paragraph from inline content
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }
}

impl DiagramBlock {
    /// Create a diagram block, trimming the source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into().trim().to_string(),
        }
    }
}
