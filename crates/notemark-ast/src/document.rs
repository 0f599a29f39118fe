//! Document snapshot consumed by the export pipeline
//!
//! The document store owns persistence; exporters receive a read-only
//! snapshot of a note's title and normalized content and own nothing
//! beyond the files they produce.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A note snapshot: title plus normalized content blocks
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Note title, used verbatim for the markdown H1 and (sanitized) for
    /// output filenames
    pub title: String,
    /// Normalized content blocks
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has no content blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of content blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Paragraph;
    use crate::inline::Inline;

    #[test]
    fn test_empty_document() {
        let doc = Document::new("Untitled");
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.title, "Untitled");
    }

    #[test]
    fn test_document_push_block() {
        let mut doc = Document::new("Notes");
        doc.push(Block::Paragraph(Paragraph::new(vec![Inline::text("Hello")])));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let mut doc = Document::new("Notes");
        doc.push(Block::Rule);
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
