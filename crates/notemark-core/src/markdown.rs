//! Markdown serializer
//!
//! Converts a normalized [`Document`] into markdown text. Output starts
//! with an H1 line built from the note title, a blank line, then the
//! converted body with blank lines between blocks.
//!
//! Diagram blocks are emitted as fenced code blocks tagged with the
//! diagram marker, containing the raw trimmed source verbatim - they are
//! never routed through the inline bold/italic rules, which could corrupt
//! diagram syntax.
//!
//! Serialization is pure and deterministic: the same document always
//! produces byte-identical output.
//!
//! # Example
//!
//! ```
//! use notemark_ast::{Block, Document, Heading, Inline};
//! use notemark_core::generate_markdown;
//!
//! let mut doc = Document::new("My Note");
//! doc.push(Block::Heading(Heading::new(1, vec![Inline::text("Intro")])));
//!
//! let markdown = generate_markdown(&doc);
//! assert!(markdown.starts_with("# My Note\n\n## Intro\n"));
//! ```

use std::fmt::Write;

use notemark_ast::{
    Block, CodeBlock, DiagramBlock, Document, FormatType, Heading, Inline, List, ListItem,
    ListKind, Paragraph, Quote, DIAGRAM_LANGUAGE,
};

/// Markdown generator
pub struct MarkdownGenerator {
    output: String,
}

impl MarkdownGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Generate markdown from a document
    pub fn generate(&mut self, doc: &Document) -> String {
        self.output.clear();

        // H1 title line
        writeln!(self.output, "# {}", doc.title).unwrap();

        // Body blocks, separated by blank lines
        for block in &doc.blocks {
            writeln!(self.output).unwrap();
            self.generate_block(block, 0);
        }

        self.output.clone()
    }

    /// Generate a single block
    fn generate_block(&mut self, block: &Block, indent: usize) {
        match block {
            Block::Paragraph(p) => self.generate_paragraph(p, indent),
            Block::Heading(h) => self.generate_heading(h),
            Block::List(l) => self.generate_list(l, indent),
            Block::Quote(q) => self.generate_quote(q),
            Block::Code(c) => self.generate_code(c),
            Block::Diagram(d) => self.generate_diagram(d),
            Block::Rule => {
                writeln!(self.output, "---").unwrap();
            }
        }
    }

    fn generate_paragraph(&mut self, para: &Paragraph, indent: usize) {
        write!(self.output, "{}", "  ".repeat(indent)).unwrap();
        self.generate_inlines(&para.inlines);
        writeln!(self.output).unwrap();
    }

    /// Headings shift down one level: the document title owns H1
    fn generate_heading(&mut self, heading: &Heading) {
        let prefix = "#".repeat(heading.level as usize + 1);
        write!(self.output, "{} ", prefix).unwrap();
        self.generate_inlines(&heading.inlines);
        writeln!(self.output).unwrap();
    }

    fn generate_list(&mut self, list: &List, indent: usize) {
        for (i, item) in list.items.iter().enumerate() {
            self.generate_list_item(item, list.kind, i, indent);
        }
    }

    fn generate_list_item(&mut self, item: &ListItem, kind: ListKind, index: usize, indent: usize) {
        write!(self.output, "{}", "  ".repeat(indent)).unwrap();
        match kind {
            ListKind::Bulleted => write!(self.output, "- ").unwrap(),
            ListKind::Numbered => write!(self.output, "{}. ", index + 1).unwrap(),
        }

        // A leading paragraph rides the marker line; the rest follow below
        let mut rest = item.blocks.as_slice();
        if let Some(Block::Paragraph(p)) = item.blocks.first() {
            self.generate_inlines(&p.inlines);
            rest = &item.blocks[1..];
        }
        writeln!(self.output).unwrap();

        for block in rest {
            match block {
                Block::List(nested) => self.generate_list(nested, indent + 1),
                other => self.generate_block(other, indent + 1),
            }
        }
    }

    fn generate_quote(&mut self, quote: &Quote) {
        let inner = Self::render_blocks(&quote.blocks);
        for line in inner.lines() {
            if line.is_empty() {
                writeln!(self.output, ">").unwrap();
            } else {
                writeln!(self.output, "> {}", line).unwrap();
            }
        }
    }

    fn generate_code(&mut self, code: &CodeBlock) {
        match code.language.as_deref() {
            Some(lang) if !lang.is_empty() => writeln!(self.output, "```{}", lang).unwrap(),
            _ => writeln!(self.output, "```").unwrap(),
        }
        write!(self.output, "{}", code.content).unwrap();
        if !code.content.ends_with('\n') {
            writeln!(self.output).unwrap();
        }
        writeln!(self.output, "```").unwrap();
    }

    /// Diagram source goes into a tagged fence verbatim, bypassing all
    /// inline conversion rules
    fn generate_diagram(&mut self, diagram: &DiagramBlock) {
        writeln!(self.output, "```{}", DIAGRAM_LANGUAGE).unwrap();
        writeln!(self.output, "{}", diagram.source).unwrap();
        writeln!(self.output, "```").unwrap();
    }

    /// Generate inline content
    fn generate_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.generate_inline(inline);
        }
    }

    fn generate_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) => write!(self.output, "{}", text).unwrap(),
            Inline::Format(format_type, inner) => {
                let marker = match format_type {
                    FormatType::Bold => "**",
                    FormatType::Italic => "*",
                };
                write!(self.output, "{}", marker).unwrap();
                self.generate_inline(inner);
                write!(self.output, "{}", marker).unwrap();
            }
            Inline::Span(inlines) => self.generate_inlines(inlines),
            Inline::Break => self.output.push_str("  \n"),
        }
    }

    /// Render a block sub-sequence to a standalone string (used for quote
    /// prefixing)
    fn render_blocks(blocks: &[Block]) -> String {
        let mut nested = MarkdownGenerator::new();
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                writeln!(nested.output).unwrap();
            }
            nested.generate_block(block, 0);
        }
        nested.output
    }
}

impl Default for MarkdownGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to generate markdown from a document
pub fn generate_markdown(doc: &Document) -> String {
    let mut generator = MarkdownGenerator::new();
    generator.generate(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(text: &str) -> Block {
        Block::Paragraph(Paragraph::new(vec![Inline::text(text)]))
    }

    #[test]
    fn test_title_and_body_shape() {
        // Scenario: one heading plus one paragraph
        let mut doc = Document::new("Release Notes");
        doc.push(Block::Heading(Heading::new(
            1,
            vec![Inline::text("Overview")],
        )));
        doc.push(para("First public build."));

        let output = generate_markdown(&doc);
        assert_eq!(
            output,
            "# Release Notes\n\n## Overview\n\nFirst public build.\n"
        );
    }

    #[test]
    fn test_heading_levels_shift_down() {
        let mut doc = Document::new("T");
        doc.push(Block::Heading(Heading::new(1, vec![Inline::text("One")])));
        doc.push(Block::Heading(Heading::new(2, vec![Inline::text("Two")])));
        doc.push(Block::Heading(Heading::new(3, vec![Inline::text("Three")])));

        let output = generate_markdown(&doc);
        assert!(output.contains("## One"));
        assert!(output.contains("### Two"));
        assert!(output.contains("#### Three"));
    }

    #[test]
    fn test_bold_and_italic() {
        let mut doc = Document::new("T");
        doc.push(Block::Paragraph(Paragraph::new(vec![
            Inline::text("plain "),
            Inline::bold(Inline::text("strong")),
            Inline::text(" and "),
            Inline::italic(Inline::text("soft")),
        ])));

        let output = generate_markdown(&doc);
        assert!(output.contains("plain **strong** and *soft*"));
    }

    #[test]
    fn test_diagram_fence_verbatim() {
        let source = "graph TD\n  A-->B";
        let mut doc = Document::new("T");
        doc.push(Block::Diagram(DiagramBlock::new(source)));

        let output = generate_markdown(&doc);
        assert!(output.contains("\n\n```mermaid\ngraph TD\n  A-->B\n```\n"));
    }

    #[test]
    fn test_diagram_round_trip() {
        // Extracting the fence body yields the original (trimmed) source
        let source = "sequenceDiagram\n  Alice->>Bob: hi\n  Bob-->>Alice: hello";
        let mut doc = Document::new("T");
        doc.push(Block::Diagram(DiagramBlock::new(source)));

        let output = generate_markdown(&doc);
        let fence_open = format!("```{}\n", DIAGRAM_LANGUAGE);
        let start = output.find(&fence_open).unwrap() + fence_open.len();
        let end = output[start..].find("\n```").unwrap() + start;
        assert_eq!(&output[start..end], source);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let mut doc = Document::new("Stable");
        doc.push(para("Same input, same bytes."));
        doc.push(Block::Diagram(DiagramBlock::new("graph LR\n  X-->Y")));
        doc.push(Block::Rule);

        let first = generate_markdown(&doc);
        let second = generate_markdown(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bulleted_and_numbered_lists() {
        let mut doc = Document::new("T");
        doc.push(Block::List(List {
            kind: ListKind::Bulleted,
            items: vec![
                ListItem {
                    blocks: vec![para("first")],
                },
                ListItem {
                    blocks: vec![para("second")],
                },
            ],
        }));
        doc.push(Block::List(List {
            kind: ListKind::Numbered,
            items: vec![
                ListItem {
                    blocks: vec![para("one")],
                },
                ListItem {
                    blocks: vec![para("two")],
                },
            ],
        }));

        let output = generate_markdown(&doc);
        assert!(output.contains("- first\n- second\n"));
        assert!(output.contains("1. one\n2. two\n"));
    }

    #[test]
    fn test_nested_list_indented() {
        let mut doc = Document::new("T");
        doc.push(Block::List(List {
            kind: ListKind::Bulleted,
            items: vec![ListItem {
                blocks: vec![
                    para("parent"),
                    Block::List(List {
                        kind: ListKind::Bulleted,
                        items: vec![ListItem {
                            blocks: vec![para("child")],
                        }],
                    }),
                ],
            }],
        }));

        let output = generate_markdown(&doc);
        assert!(output.contains("- parent\n  - child\n"));
    }

    #[test]
    fn test_quote_prefixed() {
        let mut doc = Document::new("T");
        doc.push(Block::Quote(Quote {
            blocks: vec![para("wise words"), para("more words")],
        }));

        let output = generate_markdown(&doc);
        assert!(output.contains("> wise words\n>\n> more words\n"));
    }

    #[test]
    fn test_code_block_with_and_without_language() {
        let mut doc = Document::new("T");
        doc.push(Block::Code(CodeBlock {
            language: Some("rust".to_string()),
            content: "fn main() {}".to_string(),
        }));
        doc.push(Block::Code(CodeBlock {
            language: None,
            content: "no lang\n".to_string(),
        }));

        let output = generate_markdown(&doc);
        assert!(output.contains("```rust\nfn main() {}\n```\n"));
        assert!(output.contains("\n```\nno lang\n```\n"));
    }

    #[test]
    fn test_rule() {
        let mut doc = Document::new("T");
        doc.push(Block::Rule);
        assert_eq!(generate_markdown(&doc), "# T\n\n---\n");
    }

    #[test]
    fn test_hard_break() {
        let mut doc = Document::new("T");
        doc.push(Block::Paragraph(Paragraph::new(vec![
            Inline::text("one"),
            Inline::Break,
            Inline::text("two"),
        ])));
        assert!(generate_markdown(&doc).contains("one  \ntwo"));
    }
}
