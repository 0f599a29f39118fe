//! Inline elements for document content
//!
//! Inline-level elements appear within paragraphs, headings, and list
//! items: text runs, bold/italic formatting, and line breaks.

use serde::{Deserialize, Serialize};

/// Inline-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text content
    Text(String),
    /// Formatted content (bold or italic)
    Format(FormatType, Box<Inline>),
    /// A span containing multiple inline elements
    Span(Vec<Inline>),
    /// A hard line break
    Break,
}

/// Text formatting types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatType {
    /// Bold text
    Bold,
    /// Italic text
    Italic,
}

impl Inline {
    /// Plain text run
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Bold wrapper around an inline element
    pub fn bold(inner: Inline) -> Self {
        Self::Format(FormatType::Bold, Box::new(inner))
    }

    /// Italic wrapper around an inline element
    pub fn italic(inner: Inline) -> Self {
        Self::Format(FormatType::Italic, Box::new(inner))
    }
}

/// Collect the unformatted text of a run of inline elements
///
/// Breaks become newlines; formatting wrappers are stripped. Used by the
/// PDF renderer wherever a block is laid out as plain wrapped text.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(inlines, &mut out);
    out
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Format(_, inner) => collect_text(std::slice::from_ref(inner), out),
            Inline::Span(children) => collect_text(children, out),
            Inline::Break => out.push('\n'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inline() {
        let inline = Inline::text("Hello");
        assert_eq!(inline, Inline::Text("Hello".to_string()));
    }

    #[test]
    fn test_formatted_text() {
        let bold = Inline::bold(Inline::text("important"));
        if let Inline::Format(FormatType::Bold, inner) = bold {
            assert_eq!(*inner, Inline::Text("important".to_string()));
        } else {
            panic!("Expected Bold format");
        }
    }

    #[test]
    fn test_plain_text_strips_formatting() {
        let inlines = vec![
            Inline::text("This is "),
            Inline::bold(Inline::italic(Inline::text("nested"))),
            Inline::text(" text"),
        ];
        assert_eq!(plain_text(&inlines), "This is nested text");
    }

    #[test]
    fn test_plain_text_break() {
        let inlines = vec![Inline::text("line one"), Inline::Break, Inline::text("line two")];
        assert_eq!(plain_text(&inlines), "line one\nline two");
    }
}
