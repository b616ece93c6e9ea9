//! Knobs for a MarkdownV2 rendering pass

/// Heading markers used when no configuration overrides them, indexed by heading level.
pub const DEFAULT_HEADING_MARKERS: [&str; 4] = ["📌", "✏️", "📚", "🔖"];

/// Options shared by every rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Spaces per list nesting level.
    pub indent_size: usize,
    /// Marker emitted before heading text, indexed by heading level.
    pub heading_markers: Vec<String>,
    /// Marker for heading levels past the end of `heading_markers`.
    pub default_heading_marker: String,
    pub table: TableOptions,
    pub math: MathOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub min_column_width: usize,
    /// Cells longer than this are truncated with an ellipsis. `None` keeps every cell whole.
    pub max_column_width: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MathOptions {
    /// Normalize block math that contains LaTeX instead of dropping it.
    pub normalize_blocks: bool,
    /// Shorter spans are never treated as LaTeX.
    pub min_detect_length: usize,
}

impl RenderOptions {
    pub fn heading_marker(&self, level: u8) -> &str {
        self.heading_markers
            .get(level as usize)
            .map(String::as_str)
            .unwrap_or(&self.default_heading_marker)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            heading_markers: DEFAULT_HEADING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            default_heading_marker: DEFAULT_HEADING_MARKERS[0].to_string(),
            table: TableOptions::default(),
            math: MathOptions::default(),
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_column_width: 3,
            max_column_width: None,
        }
    }
}

impl Default for MathOptions {
    fn default() -> Self {
        Self {
            normalize_blocks: false,
            min_detect_length: crate::latex::MIN_DETECT_LENGTH,
        }
    }
}
