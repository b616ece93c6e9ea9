//! Table reconstruction as a fixed-width monospace block.
//!
//!     MarkdownV2 has no tables, so a table is flattened into a grid of plain strings and laid
//!     out inside a code fence:
//!
//!     ```text
//!     | Name  | Qty |
//!     | ----- | --- |
//!     | Apple | 3   |
//!     ```
//!
//!     The whole grid is materialized before any width is computed. Rows with fewer cells are
//!     padded with empty strings so every line has the same number of fields.

use super::escape::collapse_whitespace;
use crate::options::TableOptions;
use crate::tree::{Document, Node, NodeId};

const ELLIPSIS: &str = "...";

/// Cell text of a table, with the position of its header row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub rows: Vec<Vec<String>>,
    pub header: Option<usize>,
    pub columns: usize,
}

/// Flatten header, body and footer sections into rows, in that order whatever the order of the
/// sections in the tree. A bare row as first child is the header.
pub fn collect_rows(doc: &Document, table: NodeId) -> (Vec<NodeId>, Option<usize>) {
    let rows_of = |section: NodeId| {
        doc.children(section)
            .iter()
            .copied()
            .filter(|&row| matches!(doc.node(row), Node::TableRow))
            .collect::<Vec<_>>()
    };

    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();
    let mut bare_header = false;

    for (i, &child) in doc.children(table).iter().enumerate() {
        match doc.node(child) {
            Node::TableHeader => head.extend(rows_of(child)),
            Node::TableBody => body.extend(rows_of(child)),
            Node::TableFooter => foot.extend(rows_of(child)),
            Node::TableRow => {
                bare_header |= i == 0;
                body.push(child);
            }
            _ => {}
        }
    }

    let header = (!head.is_empty() || bare_header).then_some(0);
    let mut rows = head;
    rows.extend(body);
    rows.extend(foot);
    (rows, header)
}

/// Build the text grid. `None` when the table has no rows or no columns.
pub fn build_grid(doc: &Document, table: NodeId) -> Option<TableGrid> {
    let (rows, header) = collect_rows(doc, table);
    let columns = rows
        .iter()
        .map(|&row| doc.children(row).len())
        .max()
        .unwrap_or(0);
    if rows.is_empty() || columns == 0 {
        return None;
    }

    let rows = rows
        .iter()
        .map(|&row| {
            let cells = doc.children(row);
            (0..columns)
                .map(|j| match cells.get(j) {
                    Some(&cell) if matches!(doc.node(cell), Node::TableCell { .. }) => {
                        let mut text = String::new();
                        for &child in doc.children(cell) {
                            cell_text(doc, child, &mut text);
                        }
                        text.trim().to_string()
                    }
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    Some(TableGrid {
        rows,
        header,
        columns,
    })
}

/// Append the plain text of `node` to `out`.
pub fn cell_text(doc: &Document, node: NodeId, out: &mut String) {
    match doc.node(node) {
        Node::Text { literal } => out.push_str(&collapse_whitespace(&literal.replace('\r', ""))),
        Node::Code { literal } => out.push_str(&literal.replace('\n', " ")),
        Node::Image { .. } => out.push_str("[Image]"),
        Node::Math { literal } | Node::MathBlock { literal } => out.push_str(literal),
        _ => {
            for &child in doc.children(node) {
                cell_text(doc, child, out);
            }
        }
    }
}

/// Column widths: the longest cell, at least `min_column_width`, at most `max_column_width`.
pub fn column_widths(grid: &TableGrid, options: &TableOptions) -> Vec<usize> {
    (0..grid.columns)
        .map(|j| {
            let widest = grid
                .rows
                .iter()
                .map(|row| row[j].chars().count())
                .max()
                .unwrap_or(0);
            let width = widest.max(options.min_column_width);
            match options.max_column_width {
                Some(max) => width.min(max.max(options.min_column_width)),
                None => width,
            }
        })
        .collect()
}

/// Pad `content` with spaces to `width`, or cut it down with an ellipsis.
pub fn fit(content: &str, width: usize) -> String {
    let len = content.chars().count();
    if len > width {
        let kept: String = content
            .chars()
            .take(width.saturating_sub(ELLIPSIS.len()))
            .collect();
        format!("{kept}{ELLIPSIS}")
    } else {
        format!("{content}{}", " ".repeat(width - len))
    }
}

fn push_line<I>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = String>,
{
    out.push_str("| ");
    out.push_str(&fields.into_iter().collect::<Vec<_>>().join(" | "));
    out.push_str(" |\n");
}

/// Lay out a grid inside a code fence.
pub fn render_grid(grid: &TableGrid, options: &TableOptions) -> String {
    let widths = column_widths(grid, options);
    let mut out = String::from("```\n");

    for (i, row) in grid.rows.iter().enumerate() {
        push_line(
            &mut out,
            row.iter().zip(&widths).map(|(cell, &width)| fit(cell, width)),
        );
        if grid.header == Some(i) {
            push_line(&mut out, widths.iter().map(|&width| "-".repeat(width)));
        }
    }

    out.push_str("```\n");
    out
}

/// Render a table node. Empty tables produce no output.
pub fn render_table(doc: &Document, table: NodeId, options: &TableOptions) -> String {
    build_grid(doc, table)
        .map(|grid| render_grid(&grid, options))
        .unwrap_or_default()
}
