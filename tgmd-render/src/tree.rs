//! Document tree consumed by the MarkdownV2 renderer.
//!
//!     The tree is an arena: every node lives in a single vector owned by [`Document`] and is
//!     addressed by a copyable [`NodeId`]. Each entry keeps its parent and its ordered children,
//!     so both directions are O(1) lookups. Rendering rules that depend on the parent kind
//!     (paragraphs inside list items, quotes at the document root) rely on that.
//!
//!     The tree is normally produced by [`crate::markdown::parse_markdown`], but callers can also
//!     build one directly with [`Document::append`].
//!
//! Traversal
//!
//!     [`Document::walk`] visits nodes in document order. Containers are visited twice (entering
//!     and exiting), leaves once. Returning [`WalkStatus::SkipChildren`] on entry skips the
//!     children, the exit visit still happens.

use std::fmt;

/// Handle to a node stored in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document,
    Text {
        literal: String,
    },
    Emph,
    Strong,
    Del,
    Link {
        destination: String,
        title: String,
    },
    Image {
        destination: String,
        title: String,
    },
    Code {
        literal: String,
    },
    CodeBlock {
        literal: String,
        info: String,
    },
    Heading {
        level: u8,
        literal: String,
    },
    List {
        ordered: bool,
    },
    ListItem {
        ordered: bool,
        bullet: char,
    },
    Paragraph,
    BlockQuote {
        literal: String,
    },
    HorizontalRule,
    Table,
    TableHeader,
    TableBody,
    TableFooter,
    TableRow,
    TableCell {
        literal: String,
    },
    Math {
        literal: String,
    },
    MathBlock {
        literal: String,
    },
    HtmlSpan {
        literal: String,
    },
    HtmlBlock {
        literal: String,
    },
    Footnotes,
    SoftBreak,
    HardBreak,
    CrossReference,
    Citation,
    Caption,
    CaptionFigure,
    Aside,
    DocumentMatter,
    Callout,
    Index,
    Subscript,
    Superscript,
}

/// Fieldless tag naming the kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Text,
    Emph,
    Strong,
    Del,
    Link,
    Image,
    Code,
    CodeBlock,
    Heading,
    List,
    ListItem,
    Paragraph,
    BlockQuote,
    HorizontalRule,
    Table,
    TableHeader,
    TableBody,
    TableFooter,
    TableRow,
    TableCell,
    Math,
    MathBlock,
    HtmlSpan,
    HtmlBlock,
    Footnotes,
    SoftBreak,
    HardBreak,
    CrossReference,
    Citation,
    Caption,
    CaptionFigure,
    Aside,
    DocumentMatter,
    Callout,
    Index,
    Subscript,
    Superscript,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Text => "Text",
            NodeKind::Emph => "Emph",
            NodeKind::Strong => "Strong",
            NodeKind::Del => "Del",
            NodeKind::Link => "Link",
            NodeKind::Image => "Image",
            NodeKind::Code => "Code",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::Heading => "Heading",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::HorizontalRule => "HorizontalRule",
            NodeKind::Table => "Table",
            NodeKind::TableHeader => "TableHeader",
            NodeKind::TableBody => "TableBody",
            NodeKind::TableFooter => "TableFooter",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::Math => "Math",
            NodeKind::MathBlock => "MathBlock",
            NodeKind::HtmlSpan => "HTMLSpan",
            NodeKind::HtmlBlock => "HTMLBlock",
            NodeKind::Footnotes => "Footnotes",
            NodeKind::SoftBreak => "Softbreak",
            NodeKind::HardBreak => "Hardbreak",
            NodeKind::CrossReference => "CrossReference",
            NodeKind::Citation => "Citation",
            NodeKind::Caption => "Caption",
            NodeKind::CaptionFigure => "CaptionFigure",
            NodeKind::Aside => "Aside",
            NodeKind::DocumentMatter => "DocumentMatter",
            NodeKind::Callout => "Callout",
            NodeKind::Index => "Index",
            NodeKind::Subscript => "Subscript",
            NodeKind::Superscript => "Superscript",
        }
    }

    /// Leaves are visited once by [`Document::walk`]; everything else is a container.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::Code
                | NodeKind::CodeBlock
                | NodeKind::HorizontalRule
                | NodeKind::Math
                | NodeKind::MathBlock
                | NodeKind::HtmlSpan
                | NodeKind::HtmlBlock
                | NodeKind::SoftBreak
                | NodeKind::HardBreak
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document => NodeKind::Document,
            Node::Text { .. } => NodeKind::Text,
            Node::Emph => NodeKind::Emph,
            Node::Strong => NodeKind::Strong,
            Node::Del => NodeKind::Del,
            Node::Link { .. } => NodeKind::Link,
            Node::Image { .. } => NodeKind::Image,
            Node::Code { .. } => NodeKind::Code,
            Node::CodeBlock { .. } => NodeKind::CodeBlock,
            Node::Heading { .. } => NodeKind::Heading,
            Node::List { .. } => NodeKind::List,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::Paragraph => NodeKind::Paragraph,
            Node::BlockQuote { .. } => NodeKind::BlockQuote,
            Node::HorizontalRule => NodeKind::HorizontalRule,
            Node::Table => NodeKind::Table,
            Node::TableHeader => NodeKind::TableHeader,
            Node::TableBody => NodeKind::TableBody,
            Node::TableFooter => NodeKind::TableFooter,
            Node::TableRow => NodeKind::TableRow,
            Node::TableCell { .. } => NodeKind::TableCell,
            Node::Math { .. } => NodeKind::Math,
            Node::MathBlock { .. } => NodeKind::MathBlock,
            Node::HtmlSpan { .. } => NodeKind::HtmlSpan,
            Node::HtmlBlock { .. } => NodeKind::HtmlBlock,
            Node::Footnotes => NodeKind::Footnotes,
            Node::SoftBreak => NodeKind::SoftBreak,
            Node::HardBreak => NodeKind::HardBreak,
            Node::CrossReference => NodeKind::CrossReference,
            Node::Citation => NodeKind::Citation,
            Node::Caption => NodeKind::Caption,
            Node::CaptionFigure => NodeKind::CaptionFigure,
            Node::Aside => NodeKind::Aside,
            Node::DocumentMatter => NodeKind::DocumentMatter,
            Node::Callout => NodeKind::Callout,
            Node::Index => NodeKind::Index,
            Node::Subscript => NodeKind::Subscript,
            Node::Superscript => NodeKind::Superscript,
        }
    }

    pub fn text(literal: impl Into<String>) -> Self {
        Node::Text {
            literal: literal.into(),
        }
    }
}

/// What the traversal should do after a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    GoToNext,
    SkipChildren,
}

#[derive(Debug, Clone)]
struct Entry {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed document tree rooted at a [`Node::Document`].
#[derive(Debug, Clone)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                node: Node::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `node` as the last child of `parent` and return its id.
    pub fn append(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(Entry {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.entries[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.entries[id.0].node
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.entries[id.0].children
    }

    /// Number of nodes, root included, so never zero. See [`Document::is_empty`].
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the root has no children. A fresh document is empty while its
    /// [`len`](Document::len) is 1.
    pub fn is_empty(&self) -> bool {
        self.entries[0].children.is_empty()
    }

    /// Walk the whole tree from the root, see the module docs for visit order.
    pub fn walk<E, F>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(NodeId, bool) -> Result<WalkStatus, E>,
    {
        self.walk_from(self.root(), &mut visitor)
    }

    fn walk_from<E, F>(&self, id: NodeId, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeId, bool) -> Result<WalkStatus, E>,
    {
        let status = visitor(id, true)?;
        if self.kind(id).is_leaf() {
            return Ok(());
        }
        if status != WalkStatus::SkipChildren {
            for &child in self.children(id) {
                self.walk_from(child, visitor)?;
            }
        }
        visitor(id, false)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
