//! MarkdownV2 escaping rules
//!
//! Two entry points cover the two ways text reaches the output:
//!
//! - [`escape_run`] is applied to every text node. It is context sensitive: `!` is left alone
//!   and `.` is escaped only after a number, so that `1.` is not read as a list marker.
//! - [`escape_literal`] escapes the whole reserved set unconditionally. It is used for literals
//!   emitted inside structural markers (headings, quotes, math code spans).
//!
//! Structural markers written by the renderer itself (`1\. `, `\- `) never pass through here.

/// Characters with structural meaning in MarkdownV2.
pub const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    '\\', '<',
];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// True for a non-empty string of ASCII digits.
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `c` needs a backslash when it follows `preceding` in running text.
pub fn needs_escaping(c: char, preceding: &str) -> bool {
    match c {
        '!' => false,
        '.' => is_number(preceding),
        c => is_reserved(c),
    }
}

/// Escape one text run. `last_normal_text` is the previously emitted run, consulted when the
/// run opens with a period.
pub fn escape_run(text: &str, last_normal_text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut token_start = 0;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            token_start = i + c.len_utf8();
            out.push(c);
            continue;
        }
        let token = &text[token_start..i];
        let preceding = if token_start == 0 && token.is_empty() {
            last_normal_text
        } else {
            token
        };
        if needs_escaping(c, preceding) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape every reserved character.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if is_reserved(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a link destination: only backslashes are doubled.
pub fn escape_destination(url: &str) -> String {
    url.replace('\\', "\\\\")
}

/// Turn tabs and line breaks into spaces and squeeze runs of spaces, without trimming.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        let c = match c {
            '\n' | '\r' | '\t' => ' ',
            c => c,
        };
        if c != ' ' || previous != Some(' ') {
            out.push(c);
            previous = Some(c);
        }
    }
    out
}
