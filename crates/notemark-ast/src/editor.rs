//! Raw editor node tree
//!
//! The editing surface produces a DOM-like tree of nodes, each with a
//! type string, optional attributes, optional children, and (for text
//! leaves) a text payload with formatting marks. Every field defaults so
//! that a partially-constructed document deserializes without error; the
//! normalizer treats missing pieces as empty rather than failing.

use serde::{Deserialize, Serialize};

/// A node in the editor's content tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorNode {
    /// Node type tag ("paragraph", "heading", "codeBlock", "text", ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Node attributes (heading level, code language)
    pub attrs: NodeAttrs,
    /// Child nodes; absent for leaves and for malformed nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<EditorNode>>,
    /// Text payload for text leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Formatting marks on text leaves ("bold", "italic")
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// Recognized node attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttrs {
    /// Heading level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Code block language tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A formatting mark applied to a text leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Mark type tag
    #[serde(rename = "type")]
    pub kind: String,
}

impl EditorNode {
    /// Create a container node with children
    pub fn container(kind: impl Into<String>, content: Vec<EditorNode>) -> Self {
        Self {
            kind: kind.into(),
            content: Some(content),
            ..Default::default()
        }
    }

    /// Create a text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Create a text leaf carrying formatting marks
    pub fn marked_text(text: impl Into<String>, marks: &[&str]) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
            marks: marks
                .iter()
                .map(|kind| Mark {
                    kind: (*kind).to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Set an attribute payload on this node
    pub fn with_attrs(mut self, attrs: NodeAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Children of this node, or an empty slice when content is absent
    pub fn children(&self) -> &[EditorNode] {
        self.content.as_deref().unwrap_or(&[])
    }
}
