//! Telegram MarkdownV2 output
//!
//! MarkdownV2 is a small escaping grammar: a fixed set of reserved characters must carry a
//! backslash whenever they appear as content. There are no headings, lists or tables, so
//! those are approximated:
//!
//! | Tree node        | MarkdownV2                                        |
//! |------------------|---------------------------------------------------|
//! | Heading          | `*<marker> text*` followed by a blank line        |
//! | List item        | `1\. ` or `\- ` indented by depth                 |
//! | Table            | fixed-width grid inside a code fence              |
//! | BlockQuote       | `>` prefix at document level only                 |
//! | Math / MathBlock | code span / code fence, LaTeX normalized first    |
//! | Emph/Strong/Del  | `_`, `*`, `~`                                     |
//!
//! Submodules:
//! - `escape`: reserved character rules
//! - `lists`: nested list numbering
//! - `table`: table grid reconstruction
//! - `serializer`: the dispatcher walking the tree

pub mod escape;
pub mod lists;
pub mod serializer;
pub mod table;

pub use serializer::{render, Renderer};
