use crate::common::{md, paragraph, render};
use proptest::prelude::*;
use tgmd_render::markdownv2::escape::{
    collapse_whitespace, escape_literal, escape_run, is_reserved,
};
use tgmd_render::Document;

/// Drop one level of backslash escaping.
fn unescape(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Reserved characters that appear without a preceding backslash.
fn bare_reserved(text: &str) -> Vec<char> {
    let mut bare = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if is_reserved(c) {
            bare.push(c);
        }
    }
    bare
}

#[test]
fn test_reserved_characters_in_text() {
    assert_eq!(
        md("Price: 5+3=8 (approx)\n"),
        "Price: 5\\+3\\=8 \\(approx\\)\n\n"
    );
    assert_eq!(md("a\\_b and c\\#d\n"), "a\\_b and c\\#d\n\n");
}

#[test]
fn test_period_after_number() {
    assert_eq!(md("Step 12. Done.\n"), "Step 12\\. Done.\n\n");
    assert_eq!(md("Pi is 3.14\n"), "Pi is 3\\.14\n\n");
}

#[test]
fn test_exclamation_mark_is_left_alone() {
    assert_eq!(md("Wow! Really.\n"), "Wow! Really.\n\n");
}

#[test]
fn test_period_opening_a_run_looks_at_previous_run() {
    let mut doc = Document::new();
    let root = doc.root();
    paragraph(&mut doc, root, &["1", "."]);
    assert_eq!(render(&doc), "1\\.\n\n");

    let mut doc = Document::new();
    let root = doc.root();
    paragraph(&mut doc, root, &["a", "."]);
    assert_eq!(render(&doc), "a.\n\n");
}

#[test]
fn test_whitespace_inside_runs_collapses() {
    let mut doc = Document::new();
    let root = doc.root();
    paragraph(&mut doc, root, &["a\t\tb\r\n  c"]);
    assert_eq!(render(&doc), "a b c\n\n");
}

proptest! {
    #[test]
    fn escape_run_unescapes_to_input(text in "\\PC{0,64}", previous in "[0-9a-z]{0,4}") {
        prop_assert_eq!(unescape(&escape_run(&text, &previous)), text);
    }

    #[test]
    fn escape_run_leaves_only_period_and_bang_bare(text in "\\PC{0,64}") {
        let escaped = escape_run(&text, "");
        for c in bare_reserved(&escaped) {
            prop_assert!(c == '.' || c == '!', "bare {:?} in {:?}", c, escaped);
        }
    }

    #[test]
    fn escape_literal_leaves_nothing_bare(text in "\\PC{0,64}") {
        let escaped = escape_literal(&text);
        prop_assert!(bare_reserved(&escaped).is_empty());
        prop_assert_eq!(unescape(&escaped), text);
    }

    #[test]
    fn collapsed_text_has_no_breaks_or_double_spaces(text in "[a-z .\\t\\r\\n]{0,48}") {
        let clean = collapse_whitespace(&text);
        prop_assert!(!clean.contains(&['\t', '\r', '\n'][..]));
        prop_assert!(!clean.contains("  "));
    }

    #[test]
    fn rendered_paragraph_has_no_tabs_or_double_spaces(text in "[a-z0-9 .!_*\\t]{1,48}") {
        let mut doc = Document::new();
        let root = doc.root();
        paragraph(&mut doc, root, &[text.as_str()]);
        let out = render(&doc);
        prop_assert!(!out.contains('\t'));
        prop_assert!(!out.contains("  "));
    }
}
