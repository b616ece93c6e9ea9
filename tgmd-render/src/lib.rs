//! Markdown to Telegram MarkdownV2 conversion
//!
//!     This crate turns a Markdown document into text that Telegram accepts with
//!     `parse_mode = MarkdownV2`, and approximates LaTeX math with Unicode glyphs.
//!
//!     This is a pure lib: no I/O, no environment access. Delivering the text to a chat is the
//!     caller's business.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # RenderOptions
//!     ├── tree.rs                 # Document tree and traversal
//!     ├── markdown                # Markdown → tree (comrak adapter)
//!     ├── markdownv2              # tree → MarkdownV2
//!     │   ├── escape.rs
//!     │   ├── lists.rs
//!     │   ├── table.rs
//!     │   └── serializer.rs
//!     └── latex                   # LaTeX → Unicode
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     ├── markdownv2
//!     └── latex
//!
//!     Rust does not discover tests in subdirectories on its own, so tests/lib.rs declares them.
//!
//! Core Algorithms
//!
//!     The renderer is a single depth-first walk. Each node is visited on entry and, for
//!     containers, on exit. Per-pass state (list counters, the last emitted text run, tables
//!     already rendered) lives on a [`markdownv2::Renderer`] that is consumed by the walk, so two
//!     documents never share state.
//!
//!     Tables break the node-at-a-time model: the whole table is laid out on first visit and the
//!     walk is told to skip its children.
//!
//! Failure
//!
//!     Some node kinds are refused outright (citations, cross references, breaks, sub and
//!     superscripts, ...). Rendering stops with [`RenderError::Unsupported`] naming the kind
//!     instead of emitting something half right.

pub mod error;
pub mod latex;
pub mod markdown;
pub mod markdownv2;
pub mod options;
pub mod tree;

pub use error::RenderError;
pub use latex::{escape_latex, LatexNormalizer};
pub use markdown::parse_markdown;
pub use markdownv2::render;
pub use options::RenderOptions;
pub use tree::{Document, Node, NodeId, NodeKind};

/// Convert Markdown to MarkdownV2 with default options.
pub fn convert_markdown(source: &str) -> Result<String, RenderError> {
    convert_markdown_with(source, &RenderOptions::default())
}

/// Convert Markdown to MarkdownV2.
pub fn convert_markdown_with(source: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let doc = parse_markdown(source)?;
    render(&doc, options)
}
