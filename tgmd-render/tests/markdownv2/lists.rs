use crate::common::{bullet_list, md, ordered_list, render};
use tgmd_render::{convert_markdown_with, Document, RenderOptions};

#[test]
fn test_ordered_list() {
    assert_eq!(md("1. one\n2. two\n"), "1\\. one\n2\\. two\n\n");
}

#[test]
fn test_ordered_list_ignores_start_number() {
    assert_eq!(md("3. x\n4. y\n"), "1\\. x\n2\\. y\n\n");
}

#[test]
fn test_bullet_characters_are_kept_and_escaped() {
    assert_eq!(md("- a\n- b\n"), "\\- a\n\\- b\n\n");
    assert_eq!(md("* a\n"), "\\* a\n\n");
    assert_eq!(md("+ a\n"), "\\+ a\n\n");
}

#[test]
fn test_nested_bullets_are_indented() {
    assert_eq!(md("- a\n    - b\n"), "\\- a\n    \\- b\n\n\n");
}

#[test]
fn test_indent_size_is_configurable() {
    let options = RenderOptions {
        indent_size: 2,
        ..RenderOptions::default()
    };
    assert_eq!(
        convert_markdown_with("- a\n    - b\n", &options).unwrap(),
        "\\- a\n  \\- b\n\n\n"
    );
}

#[test]
fn test_nested_ordered_lists_count_independently() {
    assert_eq!(
        md("1. a\n   1. b\n   2. c\n2. d\n"),
        "1\\. a\n    1\\. b\n    2\\. c\n\n2\\. d\n\n"
    );
}

#[test]
fn test_sibling_ordered_lists_restart() {
    let mut doc = Document::new();
    let root = doc.root();
    ordered_list(&mut doc, root, &["a", "b"]);
    ordered_list(&mut doc, root, &["c"]);
    assert_eq!(render(&doc), "1\\. a\n2\\. b\n\n1\\. c\n\n");
}

#[test]
fn test_second_paragraph_of_item_is_tab_indented() {
    assert_eq!(md("- a\n\n  b\n"), "\\- a\n\tb\n\n");
}

#[test]
fn test_line_breaks_inside_list_text_are_dropped() {
    assert_eq!(md("- a\n  b\n"), "\\- ab\n\n");
}

#[test]
fn test_text_after_list_collapses_breaks_again() {
    assert_eq!(md("- a\n\nx\ny\n"), "\\- a\n\nx y\n\n");
}

#[test]
fn test_rendering_is_repeatable() {
    let mut doc = Document::new();
    let root = doc.root();
    bullet_list(&mut doc, root, &["a"]);
    ordered_list(&mut doc, root, &["b", "c"]);
    let first = render(&doc);
    assert_eq!(first, "\\- a\n\n1\\. b\n2\\. c\n\n");
    assert_eq!(render(&doc), first);
}
