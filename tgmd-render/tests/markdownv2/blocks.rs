use crate::common::{md, render};
use insta::assert_snapshot;
use tgmd_render::{convert_markdown_with, Document, Node, RenderOptions};

#[test]
fn test_paragraphs_are_separated_by_blank_lines() {
    assert_eq!(md("first\n\nsecond\n"), "first\n\nsecond\n\n");
}

#[test]
fn test_soft_break_becomes_space() {
    assert_eq!(md("one\ntwo\n"), "one two\n\n");
}

#[test]
fn test_heading_uses_level_marker() {
    assert_eq!(md("# Title\n\nBody.\n"), "*✏️ Title*\n\nBody.\n\n");
    assert_eq!(md("## Sub\n"), "*📚 Sub*\n\n");
    assert_eq!(md("### Deeper\n"), "*🔖 Deeper*\n\n");
}

#[test]
fn test_heading_past_marker_table_falls_back() {
    assert_eq!(md("#### Deep\n"), "*📌 Deep*\n\n");
    assert_eq!(md("###### Deepest\n"), "*📌 Deepest*\n\n");
}

#[test]
fn test_heading_markers_are_configurable() {
    let options = RenderOptions {
        heading_markers: vec!["#0".into(), "#1".into()],
        default_heading_marker: "*".into(),
        ..RenderOptions::default()
    };
    assert_eq!(
        convert_markdown_with("# A\n\n## B\n", &options).unwrap(),
        "*#1 A*\n\n** B*\n\n"
    );
}

#[test]
fn test_heading_literal_is_fully_escaped() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::Heading {
            level: 1,
            literal: "v1.0!".into(),
        },
    );
    assert_eq!(render(&doc), "*✏️ v1\\.0\\!*\n\n");
}

#[test]
fn test_code_block_with_language() {
    assert_eq!(
        md("```rust\nfn main() {}\n```\n"),
        "\n```rust\nfn main() {}\n```\n\n"
    );
}

#[test]
fn test_code_block_language_drops_leading_dot() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::CodeBlock {
            literal: "x = 1\n".into(),
            info: "  .py linenos".into(),
        },
    );
    assert_eq!(render(&doc), "\n```py\nx = 1\n```\n\n");
}

#[test]
fn test_code_block_without_language() {
    assert_eq!(md("```\nraw_text *here*\n```\n"), "\n```\nraw_text *here*\n```\n\n");
}

#[test]
fn test_block_quote_at_top_level() {
    assert_eq!(md("> quoted text\n"), ">quoted text\n\n");
}

#[test]
fn test_block_quote_literal_is_escaped_and_trimmed() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::BlockQuote {
            literal: "  Quote. Now!".into(),
        },
    );
    assert_eq!(render(&doc), ">Quote\\. Now\\!");
}

#[test]
fn test_nested_block_quote_has_no_marker() {
    assert_eq!(md("- > inner\n"), "\\- inner\n\n\n");
}

#[test]
fn test_thematic_break_renders_nothing() {
    assert_eq!(md("a\n\n---\n\nb\n"), "a\n\nb\n\n");
}

#[test]
fn test_html_passes_through() {
    assert_eq!(md("Some <b>bold</b> html\n"), "Some <b>bold</b> html\n\n");

    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::HtmlBlock {
            literal: "<div>x</div>".into(),
        },
    );
    assert_eq!(render(&doc), "\n<div>x</div>\n\n");
}

#[test]
fn test_document_mix() {
    let output = md("# Shopping\n\
         \n\
         Buy these today!\n\
         \n\
         1. Apples\n\
         2. Pears\n\
         \n\
         | Item | Qty |\n\
         |------|-----|\n\
         | Fig | 12 |\n\
         \n\
         > Fresh is best\n");

    assert_snapshot!(output.trim_end(), @r"
    *✏️ Shopping*

    Buy these today!

    1\. Apples
    2\. Pears

    ```
    | Item | Qty |
    | ---- | --- |
    | Fig  | 12  |
    ```
    >Fresh is best
    ");
}
