//! Document normalizer
//!
//! Converts the editor's raw node tree into the flat, typed block
//! sequence defined in `notemark-ast`. The walk is a recursive pre-order
//! traversal that visits every node exactly once.
//!
//! Two recovery rules keep export from ever crashing on a
//! partially-constructed document:
//!
//! - A node with a missing content array contributes an empty sequence.
//! - An unrecognized node kind is treated as a pass-through container and
//!   its children are traversed, so nested unknown wrappers never swallow
//!   their contents.

use notemark_ast::{
    Block, CodeBlock, DiagramBlock, EditorNode, Heading, Inline, List, ListItem, ListKind,
    Paragraph, Quote, DIAGRAM_LANGUAGE,
};

/// Normalize an editor tree into a block sequence
///
/// The root node is expected to be the editor's `doc` wrapper; its
/// children become the top-level blocks.
pub fn normalize(root: &EditorNode) -> Vec<Block> {
    normalize_blocks(root.children())
}

/// Normalize a slice of sibling nodes into blocks
fn normalize_blocks(nodes: &[EditorNode]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for node in nodes {
        normalize_node(node, &mut blocks);
    }
    blocks
}

fn normalize_node(node: &EditorNode, out: &mut Vec<Block>) {
    match node.kind.as_str() {
        "paragraph" => {
            out.push(Block::Paragraph(Paragraph::new(normalize_inlines(
                node.children(),
            ))));
        }
        "heading" => {
            let level = node.attrs.level.unwrap_or(1);
            out.push(Block::Heading(Heading::new(
                level,
                normalize_inlines(node.children()),
            )));
        }
        "bulletList" => out.push(Block::List(List {
            kind: ListKind::Bulleted,
            items: normalize_list_items(node.children()),
        })),
        "orderedList" => out.push(Block::List(List {
            kind: ListKind::Numbered,
            items: normalize_list_items(node.children()),
        })),
        "blockquote" => out.push(Block::Quote(Quote {
            blocks: normalize_blocks(node.children()),
        })),
        "codeBlock" => out.push(classify_code_block(node)),
        "horizontalRule" => out.push(Block::Rule),
        "text" => {
            // Stray text at block level becomes its own paragraph
            let text = node.text.as_deref().unwrap_or("");
            if !text.trim().is_empty() {
                out.push(Block::Paragraph(Paragraph::new(vec![text_inline(node)])));
            }
        }
        other => {
            // Unknown wrapper: traverse children rather than dropping them
            log::debug!("normalizer: passing through unknown node kind {:?}", other);
            for child in node.children() {
                normalize_node(child, out);
            }
        }
    }
}

/// Reclassify a code block as a diagram iff its language tag equals the
/// reserved diagram marker
///
/// This is the single point where reclassification happens; serializers
/// downstream only ever see the already-classified block.
fn classify_code_block(node: &EditorNode) -> Block {
    let content = leaf_text(node);
    match node.attrs.language.as_deref() {
        Some(lang) if lang == DIAGRAM_LANGUAGE => Block::Diagram(DiagramBlock::new(content)),
        lang => Block::Code(CodeBlock {
            language: lang.map(str::to_string),
            content,
        }),
    }
}

fn normalize_list_items(nodes: &[EditorNode]) -> Vec<ListItem> {
    nodes
        .iter()
        .map(|node| {
            if node.kind == "listItem" {
                ListItem {
                    blocks: normalize_blocks(node.children()),
                }
            } else {
                // Tolerate a non-listItem child: treat it as a one-node item
                ListItem {
                    blocks: normalize_blocks(std::slice::from_ref(node)),
                }
            }
        })
        .collect()
}

fn normalize_inlines(nodes: &[EditorNode]) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for node in nodes {
        match node.kind.as_str() {
            "text" => inlines.push(text_inline(node)),
            "hardBreak" => inlines.push(Inline::Break),
            other => {
                // Unknown inline wrapper: keep its children as a span
                let children = normalize_inlines(node.children());
                if !children.is_empty() {
                    log::debug!("normalizer: wrapping unknown inline kind {:?}", other);
                    inlines.push(Inline::Span(children));
                }
            }
        }
    }
    inlines
}

/// Build the inline for a text leaf, wrapping bold/italic marks outermost-first
fn text_inline(node: &EditorNode) -> Inline {
    let mut inline = Inline::Text(node.text.clone().unwrap_or_default());
    for mark in &node.marks {
        inline = match mark.kind.as_str() {
            "bold" => Inline::bold(inline),
            "italic" => Inline::italic(inline),
            _ => inline,
        };
    }
    inline
}

/// Concatenate the text of a node's text-run descendants in document order
fn leaf_text(node: &EditorNode) -> String {
    let mut out = String::new();
    collect_leaf_text(node, &mut out);
    out
}

fn collect_leaf_text(node: &EditorNode, out: &mut String) {
    if let Some(ref text) = node.text {
        out.push_str(text);
    }
    for child in node.children() {
        collect_leaf_text(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notemark_ast::{FormatType, NodeAttrs};

    fn doc(children: Vec<EditorNode>) -> EditorNode {
        EditorNode::container("doc", children)
    }

    fn code_block(language: Option<&str>, text: &str) -> EditorNode {
        EditorNode::container("codeBlock", vec![EditorNode::text(text)]).with_attrs(NodeAttrs {
            language: language.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_normalize_paragraph() {
        let tree = doc(vec![EditorNode::container(
            "paragraph",
            vec![EditorNode::text("Hello world")],
        )]);
        let blocks = normalize(&tree);
        assert_eq!(
            blocks,
            vec![Block::Paragraph(Paragraph::new(vec![Inline::text(
                "Hello world"
            )]))]
        );
    }

    #[test]
    fn test_normalize_heading_levels() {
        let tree = doc(vec![
            EditorNode::container("heading", vec![EditorNode::text("Top")]).with_attrs(NodeAttrs {
                level: Some(2),
                ..Default::default()
            }),
            // Missing level attr defaults to 1
            EditorNode::container("heading", vec![EditorNode::text("Untagged")]),
        ]);
        let blocks = normalize(&tree);
        assert_eq!(blocks.len(), 2);
        match (&blocks[0], &blocks[1]) {
            (Block::Heading(a), Block::Heading(b)) => {
                assert_eq!(a.level, 2);
                assert_eq!(b.level, 1);
            }
            other => panic!("expected headings, got {:?}", other),
        }
    }

    #[test]
    fn test_diagram_reclassification() {
        let tree = doc(vec![
            code_block(Some("mermaid"), "\ngraph TD\n  A-->B\n"),
            code_block(Some("rust"), "fn main() {}"),
            code_block(None, "plain"),
        ]);
        let blocks = normalize(&tree);
        assert_eq!(blocks.len(), 3);
        match &blocks[0] {
            Block::Diagram(diagram) => assert_eq!(diagram.source, "graph TD\n  A-->B"),
            other => panic!("expected diagram, got {:?}", other),
        }
        match &blocks[1] {
            Block::Code(code) => {
                assert_eq!(code.language.as_deref(), Some("rust"));
                assert_eq!(code.content, "fn main() {}");
            }
            other => panic!("expected code, got {:?}", other),
        }
        assert!(matches!(&blocks[2], Block::Code(code) if code.language.is_none()));
    }

    #[test]
    fn test_missing_content_is_empty_not_fatal() {
        let node: EditorNode = serde_json::from_str(r#"{"type": "doc"}"#).unwrap();
        assert!(normalize(&node).is_empty());

        let node: EditorNode =
            serde_json::from_str(r#"{"type": "doc", "content": [{"type": "bulletList"}]}"#)
                .unwrap();
        let blocks = normalize(&node);
        assert_eq!(
            blocks,
            vec![Block::List(List {
                kind: ListKind::Bulleted,
                items: vec![],
            })]
        );
    }

    #[test]
    fn test_unknown_wrapper_passes_through_children() {
        let tree = doc(vec![EditorNode::container(
            "callout",
            vec![
                EditorNode::container("figure", vec![EditorNode::container(
                    "paragraph",
                    vec![EditorNode::text("inside")],
                )]),
            ],
        )]);
        let blocks = normalize(&tree);
        assert_eq!(
            blocks,
            vec![Block::Paragraph(Paragraph::new(vec![Inline::text(
                "inside"
            )]))]
        );
    }

    #[test]
    fn test_marks_become_format_wrappers() {
        let tree = doc(vec![EditorNode::container(
            "paragraph",
            vec![
                EditorNode::marked_text("strong", &["bold"]),
                EditorNode::marked_text("both", &["italic", "bold"]),
            ],
        )]);
        let blocks = normalize(&tree);
        let Block::Paragraph(para) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(para.inlines[0], Inline::bold(Inline::text("strong")));
        // Marks wrap in order: later marks end up outermost
        assert_eq!(
            para.inlines[1],
            Inline::Format(
                FormatType::Bold,
                Box::new(Inline::Format(
                    FormatType::Italic,
                    Box::new(Inline::Text("both".to_string()))
                ))
            )
        );
    }

    #[test]
    fn test_nested_list_structure_preserved() {
        let inner = EditorNode::container(
            "bulletList",
            vec![EditorNode::container(
                "listItem",
                vec![EditorNode::container(
                    "paragraph",
                    vec![EditorNode::text("child")],
                )],
            )],
        );
        let tree = doc(vec![EditorNode::container(
            "bulletList",
            vec![EditorNode::container(
                "listItem",
                vec![
                    EditorNode::container("paragraph", vec![EditorNode::text("parent")]),
                    inner,
                ],
            )],
        )]);
        let blocks = normalize(&tree);
        let Block::List(list) = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(list.items.len(), 1);
        // The item keeps its paragraph and the nested list as sub-blocks
        assert_eq!(list.items[0].blocks.len(), 2);
        assert!(matches!(list.items[0].blocks[1], Block::List(_)));
    }

    #[test]
    fn test_stray_block_level_text() {
        let tree = doc(vec![EditorNode::text("  "), EditorNode::text("loose")]);
        let blocks = normalize(&tree);
        // Whitespace-only text is dropped, real text becomes a paragraph
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::Paragraph(_)));
    }

    #[test]
    fn test_hard_break_inline() {
        let tree = doc(vec![EditorNode::container(
            "paragraph",
            vec![
                EditorNode::text("one"),
                EditorNode::container("hardBreak", vec![]),
                EditorNode::text("two"),
            ],
        )]);
        let blocks = normalize(&tree);
        let Block::Paragraph(para) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(para.inlines[1], Inline::Break);
    }
}
