use insta::assert_snapshot;
use tgmd_render::{escape_latex, LatexNormalizer};

#[test]
fn test_inline_span_becomes_code() {
    assert_eq!(
        escape_latex("Sum \\(\\alpha + \\beta\\) here"),
        "Sum `α \\+ β` here"
    );
}

#[test]
fn test_block_span_becomes_fenced_code() {
    assert_eq!(escape_latex("\\[\\frac{a}{b}\\]"), "```\na/b\n```");
}

#[test]
fn test_spans_without_latex_are_untouched() {
    let text = "Inline \\(x+y\\) stays, and \\[a = b\\] too";
    assert_eq!(escape_latex(text), text);
}

#[test]
fn test_spans_do_not_cross_paragraphs() {
    let text = "\\(\\alpha\n\n\\beta\\)";
    assert_eq!(escape_latex(text), text);
}

#[test]
fn test_normalized_span_is_trimmed() {
    assert_eq!(escape_latex("\\[  \\pi r  \\]"), "```\nπ r\n```");
}

#[test]
fn test_threshold_applies_to_prose() {
    let loose = LatexNormalizer::with_min_length(0);
    assert_eq!(loose.escape_latex("\\(\\pi\\)"), "`π`");
    assert_eq!(escape_latex("\\(\\pi\\)"), "\\(\\pi\\)");
}

#[test]
fn test_mixed_prose() {
    let text = "Consider the series\n\
                \n\
                \\[\\sum x_{i} \\leq \\infty\\]\n\
                \n\
                where \\(x_{i} \\geq 0\\) for each i.";

    assert_snapshot!(escape_latex(text), @r"
    Consider the series

    ```
    ∑ xᵢ ≤ ∞
    ```

    where `xᵢ ≥ 0` for each i.
    ");
}
