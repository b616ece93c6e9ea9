//! Markdown parsing (Markdown → document tree)
//!
//! Pipeline: Markdown string → Comrak AST → [`Document`]

use crate::error::RenderError;
use crate::tree::{Document, Node, NodeId};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into a document tree.
pub fn parse_markdown(source: &str) -> Result<Document, RenderError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut doc = Document::new();
    let doc_root = doc.root();
    convert_children(root, &mut doc, doc_root)?;
    Ok(doc)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.superscript = true;
    options.extension.math_dollars = true;
    options.extension.math_code = true;
    options
}

fn convert_children<'a>(
    node: &'a AstNode<'a>,
    doc: &mut Document,
    parent: NodeId,
) -> Result<(), RenderError> {
    for child in node.children() {
        convert_node(child, doc, parent)?;
    }
    Ok(())
}

fn convert_node<'a>(
    node: &'a AstNode<'a>,
    doc: &mut Document,
    parent: NodeId,
) -> Result<(), RenderError> {
    let converted = match &node.data.borrow().value {
        NodeValue::Document => return convert_children(node, doc, parent),
        NodeValue::Table(_) => return convert_table(node, doc, parent),
        NodeValue::FrontMatter(_) => Node::DocumentMatter,
        NodeValue::BlockQuote => Node::BlockQuote {
            literal: String::new(),
        },
        NodeValue::List(list) => Node::List {
            ordered: list.list_type == ListType::Ordered,
        },
        NodeValue::Item(list) => Node::ListItem {
            ordered: list.list_type == ListType::Ordered,
            bullet: list.bullet_char as char,
        },
        NodeValue::CodeBlock(code_block) => Node::CodeBlock {
            literal: code_block.literal.clone(),
            info: code_block.info.clone(),
        },
        NodeValue::HtmlBlock(html) => Node::HtmlBlock {
            literal: html.literal.clone(),
        },
        NodeValue::Paragraph => Node::Paragraph,
        NodeValue::Heading(heading) => Node::Heading {
            level: heading.level,
            literal: String::new(),
        },
        NodeValue::ThematicBreak => Node::HorizontalRule,
        NodeValue::FootnoteDefinition(_) => Node::Footnotes,
        NodeValue::Text(text) => Node::text(text.clone()),
        NodeValue::SoftBreak => Node::text("\n"),
        NodeValue::LineBreak => Node::HardBreak,
        NodeValue::Code(code) => Node::Code {
            literal: code.literal.clone(),
        },
        NodeValue::HtmlInline(html) => Node::HtmlSpan {
            literal: html.clone(),
        },
        NodeValue::Emph => Node::Emph,
        NodeValue::Strong => Node::Strong,
        NodeValue::Strikethrough => Node::Del,
        NodeValue::Superscript => Node::Superscript,
        NodeValue::Link(link) => Node::Link {
            destination: link.url.clone(),
            title: link.title.clone(),
        },
        NodeValue::Image(link) => Node::Image {
            destination: link.url.clone(),
            title: link.title.clone(),
        },
        NodeValue::Math(math) if math.display_math => Node::MathBlock {
            literal: math.literal.clone(),
        },
        NodeValue::Math(math) => Node::Math {
            literal: math.literal.clone(),
        },
        other => return Err(RenderError::Unmapped(kind_name(other))),
    };

    let id = doc.append(parent, converted);
    convert_children(node, doc, id)
}

/// Comrak has no header/body wrappers; header rows go under `TableHeader`, the rest under
/// `TableBody`.
fn convert_table<'a>(
    node: &'a AstNode<'a>,
    doc: &mut Document,
    parent: NodeId,
) -> Result<(), RenderError> {
    let table = doc.append(parent, Node::Table);
    let mut header = None;
    let mut body = None;

    for row in node.children() {
        let section = match &row.data.borrow().value {
            NodeValue::TableRow(true) => {
                *header.get_or_insert_with(|| doc.append(table, Node::TableHeader))
            }
            NodeValue::TableRow(false) => {
                *body.get_or_insert_with(|| doc.append(table, Node::TableBody))
            }
            other => return Err(RenderError::Unmapped(kind_name(other))),
        };

        let row_id = doc.append(section, Node::TableRow);
        for cell in row.children() {
            let cell_id = doc.append(
                row_id,
                Node::TableCell {
                    literal: String::new(),
                },
            );
            convert_children(cell, doc, cell_id)?;
        }
    }

    Ok(())
}

/// Variant name of a comrak node, e.g. `DescriptionList`.
fn kind_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}
