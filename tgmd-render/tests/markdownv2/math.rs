use crate::common::md;
use tgmd_render::options::MathOptions;
use tgmd_render::{convert_markdown_with, Document, Node, RenderOptions};

fn with_math(math: MathOptions) -> RenderOptions {
    RenderOptions {
        math,
        ..RenderOptions::default()
    }
}

#[test]
fn test_inline_latex_is_normalized() {
    assert_eq!(md("Area $\\pi r^2$ here\n"), "Area ` π r^2 ` here\n\n");
}

#[test]
fn test_inline_math_without_latex_is_escaped() {
    assert_eq!(md("$x+y$ ok\n"), "` x\\+y ` ok\n\n");
}

#[test]
fn test_code_math_syntax() {
    assert_eq!(md("$`\\alpha + 1`$\n"), "` α \\+ 1 `\n\n");
}

#[test]
fn test_block_latex_is_suppressed_by_default() {
    assert_eq!(md("$$\\frac{a}{b}$$\n"), "");
}

#[test]
fn test_block_latex_can_be_normalized() {
    let options = with_math(MathOptions {
        normalize_blocks: true,
        ..MathOptions::default()
    });
    assert_eq!(
        convert_markdown_with("$$\\frac{a}{b}$$\n", &options).unwrap(),
        "```\na/b\n```\n\n"
    );
}

#[test]
fn test_block_math_without_latex_is_kept() {
    assert_eq!(md("$$a+b$$\n"), "```\na\\+b\n```\n\n");
}

#[test]
fn test_detection_threshold_is_configurable() {
    let options = with_math(MathOptions {
        min_detect_length: 0,
        ..MathOptions::default()
    });
    assert_eq!(
        convert_markdown_with("$\\pi$\n", &options).unwrap(),
        "` π `\n\n"
    );
    assert_eq!(md("$\\pi$\n"), "` \\\\pi `\n\n");
}

#[test]
fn test_math_nodes_built_by_hand() {
    let mut doc = Document::new();
    doc.append(
        doc.root(),
        Node::Math {
            literal: "\\sqrt{2} \\approx 1.41".into(),
        },
    );
    let out = tgmd_render::render(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(out, "` √2 ≈ 1\\.41 `");
}
