//! Markdown front end
//!
//! Parsing is delegated to the `comrak` crate. This module only adapts comrak's AST to the
//! [`crate::tree::Document`] the renderer consumes.
//!
//! # Element Mapping Table
//!
//! | Comrak node             | Tree node                    | Notes                                  |
//! |-------------------------|------------------------------|----------------------------------------|
//! | Paragraph, Heading      | Paragraph, Heading           | heading text stays in child nodes      |
//! | List, Item              | List, ListItem               | ordered flag and bullet char kept      |
//! | BlockQuote              | BlockQuote                   | content stays in child nodes           |
//! | CodeBlock, HtmlBlock    | CodeBlock, HTMLBlock         | direct                                 |
//! | Table / TableRow(true)  | Table / TableHeader / row    | header rows grouped under TableHeader  |
//! | TableRow(false)         | TableBody / row              | remaining rows grouped under TableBody |
//! | Text, Code, HtmlInline  | Text, Code, HTMLSpan         | direct                                 |
//! | SoftBreak               | Text("\n")                   | collapsed or dropped by the renderer   |
//! | LineBreak               | Hardbreak                    | refused by the renderer                |
//! | Emph, Strong            | Emph, Strong                 | direct                                 |
//! | Strikethrough           | Del                          | direct                                 |
//! | Link, Image             | Link, Image                  | url and title kept                     |
//! | Math (`$..$`, `$$..$$`) | Math, MathBlock              | by `display_math`                      |
//! | ThematicBreak           | HorizontalRule               | renders nothing                        |
//! | FootnoteDefinition      | Footnotes                    | content rendered in place              |
//! | Superscript, FrontMatter| Superscript, DocumentMatter  | refused by the renderer                |
//!
//! Anything else fails with [`crate::RenderError::Unmapped`].

pub mod parser;

pub use parser::parse_markdown;
