use crate::common::paragraph;
use tgmd_render::{convert_markdown, render, Document, Node, NodeKind, RenderError, RenderOptions};

fn render_err(doc: &Document) -> RenderError {
    render(doc, &RenderOptions::default()).unwrap_err()
}

#[test]
fn test_hard_break_is_unsupported() {
    let err = convert_markdown("a  \nb\n").unwrap_err();
    assert_eq!(err, RenderError::Unsupported(NodeKind::HardBreak));
    assert_eq!(err.to_string(), "unsupported construct: Hardbreak");
}

#[test]
fn test_superscript_is_unsupported() {
    let err = convert_markdown("e = mc^2^\n").unwrap_err();
    assert_eq!(err.unsupported_kind(), Some(NodeKind::Superscript));
}

#[test]
fn test_unimplemented_kinds_fail_after_partial_output() {
    let unsupported = [
        Node::SoftBreak,
        Node::HardBreak,
        Node::CrossReference,
        Node::Citation,
        Node::Caption,
        Node::CaptionFigure,
        Node::Aside,
        Node::DocumentMatter,
        Node::Callout,
        Node::Index,
        Node::Subscript,
        Node::Superscript,
    ];

    for node in unsupported {
        let kind = node.kind();
        let mut doc = Document::new();
        let root = doc.root();
        paragraph(&mut doc, root, &["rendered first"]);
        doc.append(root, node);

        assert_eq!(render_err(&doc), RenderError::Unsupported(kind), "{kind}");
    }
}

#[test]
fn test_footnotes_render_nothing() {
    let mut doc = Document::new();
    let footnotes = doc.append(doc.root(), Node::Footnotes);
    paragraph(&mut doc, footnotes, &["note"]);
    assert_eq!(render(&doc, &RenderOptions::default()).unwrap(), "note\n\n");
}

#[test]
fn test_unmapped_error_names_the_construct() {
    let err = RenderError::Unmapped("DescriptionList".into());
    assert_eq!(
        err.to_string(),
        "markdown construct has no document tree equivalent: DescriptionList"
    );
    assert_eq!(err.unsupported_kind(), None);
}
