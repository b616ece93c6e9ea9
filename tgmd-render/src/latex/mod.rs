//! LaTeX to Unicode normalization
//!
//!     MarkdownV2 has no math support, so LaTeX fragments are approximated with Unicode glyphs
//!     and shown as code. This is best effort: commands missing from the symbol table are left
//!     verbatim.
//!
//! Pipeline
//!
//!     [`LatexNormalizer::normalize`] runs a fixed sequence of rewrites, each stage working on
//!     the output of the previous one:
//!
//!     1. symbols:     longest-match-first substitution over [`symbols::SYMBOLS`]
//!     2. fraction:    `\frac{A}{B}` → `A/B`
//!     3. root:        `\sqrt{X}` → `√X`
//!     4. superscript: `^{d}` → superscript digit (single ASCII digits only)
//!     5. subscript:   `_{t}` → subscript glyph for digits and i, j, k, n, m, else `_t`
//!
//!     The structural stages match single brace groups without nesting.
//!
//! Prose
//!
//!     [`LatexNormalizer::escape_latex`] finds `\[...\]` and `\(...\)` spans in running text and
//!     converts only those whose interior is detected as LaTeX. Anything else stays untouched.

pub mod symbols;

use crate::markdownv2::escape::escape_literal;
use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Spans shorter than this (in bytes) are never treated as LaTeX.
pub const MIN_DETECT_LENGTH: usize = 5;

/// Structural commands that mark a span as LaTeX even without a table symbol.
pub const STRUCTURAL_COMMANDS: &[&str] = &[
    "\\frac",
    "\\sqrt",
    "\\begin",
    "\\end",
    "\\left",
    "\\right",
    "\\limits",
    "\\displaystyle",
];

static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\frac\{([^}]+)\}\{([^}]+)\}").expect("fraction pattern"));
static ROOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\sqrt\{([^}]+)\}").expect("root pattern"));
static SUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\{([0-9])\}").expect("superscript pattern"));
static SUBSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_\{([^}]+)\}").expect("subscript pattern"));
static BLOCK_MATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\\[(.*?)\\\]").expect("block math pattern"));
static INLINE_MATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\\((.*?)\\\)").expect("inline math pattern"));

type Rewrite = fn(&str) -> String;

/// Rewrite stages in the order they run.
const PIPELINE: &[(&str, Rewrite)] = &[
    ("symbols", substitute_symbols),
    ("fraction", rewrite_fractions),
    ("root", rewrite_roots),
    ("superscript", rewrite_superscripts),
    ("subscript", rewrite_subscripts),
];

/// Detects and converts LaTeX fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatexNormalizer {
    min_length: usize,
}

impl LatexNormalizer {
    pub fn new() -> Self {
        Self::with_min_length(MIN_DETECT_LENGTH)
    }

    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Whether `text` looks like LaTeX: long enough and containing a structural command or a
    /// table symbol.
    pub fn detect(&self, text: &str) -> bool {
        if text.len() < self.min_length {
            return false;
        }
        STRUCTURAL_COMMANDS.iter().any(|cmd| text.contains(cmd))
            || symbols::SYMBOLS.iter().any(|(key, _)| text.contains(key))
    }

    /// Convert `text` to its Unicode approximation. The result is plain text, not yet escaped.
    pub fn normalize(&self, text: &str) -> String {
        PIPELINE
            .iter()
            .fold(text.to_string(), |acc, (stage, rewrite)| {
                let next = rewrite(&acc);
                if next != acc {
                    trace!("latex {stage}: {acc:?} -> {next:?}");
                }
                next
            })
    }

    /// Convert the `\[...\]` and `\(...\)` spans of running text into MarkdownV2 code.
    pub fn escape_latex(&self, text: &str) -> String {
        text.split("\n\n")
            .map(|paragraph| {
                let blocks = BLOCK_MATH
                    .replace_all(paragraph, |caps: &Captures| self.rewrite_span(caps, true));
                INLINE_MATH
                    .replace_all(&blocks, |caps: &Captures| self.rewrite_span(caps, false))
                    .into_owned()
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn rewrite_span(&self, caps: &Captures, block: bool) -> String {
        let content = &caps[1];
        if !self.detect(content) {
            return caps[0].to_string();
        }
        let escaped = escape_literal(&self.normalize(content));
        let escaped = escaped.trim();
        if block {
            format!("```\n{escaped}\n```")
        } else {
            format!("`{escaped}`")
        }
    }
}

impl Default for LatexNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// [`LatexNormalizer::detect`] with the default threshold.
pub fn contains_latex(text: &str) -> bool {
    LatexNormalizer::new().detect(text)
}

/// [`LatexNormalizer::normalize`] with the default threshold.
pub fn normalize(text: &str) -> String {
    LatexNormalizer::new().normalize(text)
}

/// [`LatexNormalizer::escape_latex`] with the default threshold.
pub fn escape_latex(text: &str) -> String {
    LatexNormalizer::new().escape_latex(text)
}

fn substitute_symbols(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c == '\\' {
            if let Some((key, glyph)) = symbols::BY_LENGTH
                .iter()
                .find(|(key, _)| rest.starts_with(key))
            {
                out.push_str(glyph);
                rest = &rest[key.len()..];
                continue;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn rewrite_fractions(text: &str) -> String {
    FRACTION.replace_all(text, "$1/$2").into_owned()
}

fn rewrite_roots(text: &str) -> String {
    ROOT.replace_all(text, "√$1").into_owned()
}

fn rewrite_superscripts(text: &str) -> String {
    SUPERSCRIPT
        .replace_all(text, |caps: &Captures| {
            symbols::superscript(&caps[1])
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn rewrite_subscripts(text: &str) -> String {
    SUBSCRIPT
        .replace_all(text, |caps: &Captures| match symbols::subscript(&caps[1]) {
            Some(glyph) => glyph.to_string(),
            None => format!("_{}", &caps[1]),
        })
        .into_owned()
}
