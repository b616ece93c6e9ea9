use crate::common::{md, render};
use tgmd_render::{Document, Node};

#[test]
fn test_emphasis_strong_and_strikethrough() {
    assert_eq!(md("Hello *world*\n"), "Hello _world_\n\n");
    assert_eq!(md("**bold** move\n"), "*bold* move\n\n");
    assert_eq!(md("~~gone~~\n"), "~gone~\n\n");
}

#[test]
fn test_nested_inlines() {
    assert_eq!(md("***both***\n"), "_*both*_\n\n");
}

#[test]
fn test_link_with_title() {
    assert_eq!(
        md("[site](https://example.com \"Title\")\n"),
        "[site](https://example.com \"Title\")\n\n"
    );
}

#[test]
fn test_link_destination_doubles_backslashes() {
    let mut doc = Document::new();
    let link = doc.append(
        doc.root(),
        Node::Link {
            destination: "C:\\docs".into(),
            title: String::new(),
        },
    );
    doc.append(link, Node::text("docs"));
    assert_eq!(render(&doc), "[docs](C:\\\\docs)");
}

#[test]
fn test_image_renders_as_link() {
    assert_eq!(md("![alt](pic.png)\n"), "[alt](pic.png)\n\n");
}

#[test]
fn test_autolink() {
    assert_eq!(
        md("see https://x.com\n"),
        "see [https://x.com](https://x.com)\n\n"
    );
}

#[test]
fn test_inline_code_is_verbatim() {
    assert_eq!(md("Use `a_b*c` now\n"), "Use `a_b*c` now\n\n");
}

#[test]
fn test_html_span_is_verbatim() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::HtmlSpan {
            literal: "<i>a_b</i>".into(),
        },
    );
    assert_eq!(render(&doc), "<i>a_b</i>");
}
