//! MarkdownV2 serialization (document tree → MarkdownV2 text)
//!
//! A [`Renderer`] owns all of the state of one pass: list counters, the last emitted text run,
//! the length of the last write and the set of tables already rendered. It is consumed by
//! [`Renderer::render`], so state never leaks from one document into the next.

use super::escape::{collapse_whitespace, escape_destination, escape_literal, escape_run};
use super::lists::ListTracker;
use super::table::render_table;
use crate::error::RenderError;
use crate::latex::LatexNormalizer;
use crate::options::RenderOptions;
use crate::tree::{Document, Node, NodeId, WalkStatus};
use log::{debug, warn};
use std::collections::HashSet;

/// Render a document with fresh per-pass state.
pub fn render(doc: &Document, options: &RenderOptions) -> Result<String, RenderError> {
    Renderer::new(doc, options).render()
}

/// One MarkdownV2 rendering pass over a document.
pub struct Renderer<'a> {
    doc: &'a Document,
    options: &'a RenderOptions,
    latex: LatexNormalizer,
    out: String,
    lists: ListTracker,
    last_normal_text: String,
    last_output_len: usize,
    visited_tables: HashSet<NodeId>,
}

impl<'a> Renderer<'a> {
    pub fn new(doc: &'a Document, options: &'a RenderOptions) -> Self {
        Self {
            doc,
            options,
            latex: LatexNormalizer::with_min_length(options.math.min_detect_length),
            out: String::new(),
            lists: ListTracker::new(),
            last_normal_text: String::new(),
            last_output_len: 0,
            visited_tables: HashSet::new(),
        }
    }

    pub fn render(mut self) -> Result<String, RenderError> {
        let doc = self.doc;
        doc.walk(|id, entering| self.render_node(id, entering))
            .inspect_err(|e| warn!("render aborted: {e}"))?;
        Ok(self.out)
    }

    fn out(&mut self, s: &str) {
        self.last_output_len = s.len();
        self.out.push_str(s);
    }

    /// Dispatch one visit. Returns `SkipChildren` after a table has been rendered whole.
    pub fn render_node(&mut self, id: NodeId, entering: bool) -> Result<WalkStatus, RenderError> {
        let doc = self.doc;
        if self.inside_rendered_table(id) {
            return Ok(WalkStatus::GoToNext);
        }
        match doc.node(id) {
            Node::Document | Node::Footnotes | Node::HorizontalRule => {}
            Node::Text { literal } => self.text(literal),
            Node::Emph => self.out("_"),
            Node::Strong => self.out("*"),
            Node::Del => self.out("~"),
            Node::Link { destination, title } | Node::Image { destination, title } => {
                self.link(destination, title, entering)
            }
            Node::Code { literal } => {
                self.out("`");
                self.out(literal);
                self.out("`");
            }
            Node::CodeBlock { literal, info } => self.code_block(literal, info),
            Node::Heading { level, literal } => self.heading(*level, literal, entering),
            Node::List { ordered } => self.list(*ordered, entering),
            Node::ListItem { ordered, bullet } => {
                if entering {
                    self.list_item(*ordered, *bullet);
                }
            }
            Node::Paragraph => self.paragraph(id, entering),
            Node::BlockQuote { literal } => {
                if entering {
                    self.block_quote(id, literal);
                }
            }
            Node::HtmlSpan { literal } => self.out(literal),
            Node::HtmlBlock { literal } => {
                self.out("\n");
                self.out(literal);
                self.out("\n\n");
            }
            Node::Table => {
                if !self.visited_tables.insert(id) {
                    return Ok(WalkStatus::GoToNext);
                }
                let block = render_table(doc, id, &self.options.table);
                debug!("rendered table {:?} ({} bytes)", id, block.len());
                self.out(&block);
                return Ok(WalkStatus::SkipChildren);
            }
            // Rendered as part of their table.
            Node::TableHeader
            | Node::TableBody
            | Node::TableFooter
            | Node::TableRow
            | Node::TableCell { .. } => {}
            Node::Math { literal } => self.math(literal),
            Node::MathBlock { literal } => self.math_block(literal),
            node @ (Node::SoftBreak
            | Node::HardBreak
            | Node::CrossReference
            | Node::Citation
            | Node::Caption
            | Node::CaptionFigure
            | Node::Aside
            | Node::DocumentMatter
            | Node::Callout
            | Node::Index
            | Node::Subscript
            | Node::Superscript) => return Err(RenderError::Unsupported(node.kind())),
        }
        Ok(WalkStatus::GoToNext)
    }

    /// Whether an ancestor of `id` is a table that has already been emitted.
    fn inside_rendered_table(&self, id: NodeId) -> bool {
        if self.visited_tables.is_empty() {
            return false;
        }
        let mut current = self.doc.parent(id);
        while let Some(ancestor) = current {
            if self.visited_tables.contains(&ancestor) {
                return true;
            }
            current = self.doc.parent(ancestor);
        }
        false
    }

    fn text(&mut self, literal: &str) {
        let escaped = escape_run(literal, &self.last_normal_text);
        self.last_normal_text = literal.to_string();
        if self.lists.in_list() && escaped == "\n" {
            return;
        }
        let clean = collapse_whitespace(&escaped);
        if clean.is_empty() {
            return;
        }
        self.out(&clean);
    }

    fn link(&mut self, destination: &str, title: &str, entering: bool) {
        if entering {
            self.out("[");
            return;
        }
        self.out("](");
        self.out(&escape_destination(destination));
        if !title.is_empty() {
            self.out(" \"");
            self.out(title);
            self.out("\"");
        }
        self.out(")");
    }

    fn code_block(&mut self, literal: &str, info: &str) {
        self.out("\n");
        let language = info
            .split_whitespace()
            .map(|field| field.strip_prefix('.').unwrap_or(field))
            .find(|field| !field.is_empty());
        self.out("```");
        if let Some(language) = language {
            self.out(language);
        }
        self.out("\n");
        self.out(literal);
        self.out("```\n\n");
    }

    fn heading(&mut self, level: u8, literal: &str, entering: bool) {
        if entering {
            let marker = self.options.heading_marker(level).to_string();
            self.out("*");
            self.out(&marker);
            self.out(" ");
            self.out(&escape_literal(literal));
        } else {
            self.out("*");
            self.out("\n\n");
        }
    }

    fn list(&mut self, ordered: bool, entering: bool) {
        if entering {
            self.lists.enter(ordered);
        } else {
            self.lists.exit();
            self.out("\n");
        }
    }

    fn list_item(&mut self, ordered: bool, bullet: char) {
        let indent = self.lists.indent(self.options.indent_size);
        self.out(&indent);
        let marker = if ordered {
            format!("{}\\. ", self.lists.next())
        } else {
            format!("\\{bullet} ")
        };
        self.out(&marker);
    }

    fn paragraph(&mut self, id: NodeId, entering: bool) {
        let doc = self.doc;
        let item = doc
            .parent(id)
            .filter(|&parent| matches!(doc.node(parent), Node::ListItem { .. }));

        if entering {
            // Hanging indent for the second paragraph of a list item.
            if let Some(item) = item {
                if doc.children(item).get(1) == Some(&id) {
                    self.out("\t");
                }
            }
        } else if self.last_output_len > 0 {
            self.out(if item.is_some() { "\n" } else { "\n\n" });
        }
    }

    fn block_quote(&mut self, id: NodeId, literal: &str) {
        let at_root = self
            .doc
            .parent(id)
            .is_some_and(|parent| matches!(self.doc.node(parent), Node::Document));
        let escaped = escape_literal(literal);
        if at_root {
            self.out(">");
        }
        self.out(escaped.trim_start_matches(' '));
    }

    fn math(&mut self, literal: &str) {
        let content = if self.latex.detect(literal) {
            self.latex.normalize(literal)
        } else {
            literal.to_string()
        };
        self.out("` ");
        self.out(&escape_literal(&content));
        self.out(" `");
    }

    fn math_block(&mut self, literal: &str) {
        let content = if self.latex.detect(literal) {
            if !self.options.math.normalize_blocks {
                debug!("suppressing block math containing LaTeX");
                return;
            }
            self.latex.normalize(literal)
        } else {
            literal.to_string()
        };
        self.out("```\n");
        self.out(&escape_literal(&content));
        self.out("\n```");
    }
}
