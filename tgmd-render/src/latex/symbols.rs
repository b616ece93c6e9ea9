//! LaTeX command to Unicode symbol table
//!
//! `\frac` and `\sqrt` are absent: they are rewritten structurally after symbol
//! substitution and must survive it.

use once_cell::sync::Lazy;

pub static SYMBOLS: &[(&str, &str)] = &[
    // Greek lowercase
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\delta", "δ"),
    ("\\epsilon", "ε"),
    ("\\varepsilon", "ε"),
    ("\\zeta", "ζ"),
    ("\\eta", "η"),
    ("\\theta", "θ"),
    ("\\vartheta", "ϑ"),
    ("\\iota", "ι"),
    ("\\kappa", "κ"),
    ("\\lambda", "λ"),
    ("\\mu", "μ"),
    ("\\nu", "ν"),
    ("\\xi", "ξ"),
    ("\\pi", "π"),
    ("\\varpi", "ϖ"),
    ("\\rho", "ρ"),
    ("\\varrho", "ϱ"),
    ("\\sigma", "σ"),
    ("\\varsigma", "ς"),
    ("\\tau", "τ"),
    ("\\upsilon", "υ"),
    ("\\phi", "φ"),
    ("\\varphi", "φ"),
    ("\\chi", "χ"),
    ("\\psi", "ψ"),
    ("\\omega", "ω"),
    // Greek uppercase
    ("\\Gamma", "Γ"),
    ("\\Delta", "Δ"),
    ("\\Theta", "Θ"),
    ("\\Lambda", "Λ"),
    ("\\Xi", "Ξ"),
    ("\\Pi", "Π"),
    ("\\Sigma", "Σ"),
    ("\\Upsilon", "Υ"),
    ("\\Phi", "Φ"),
    ("\\Psi", "Ψ"),
    ("\\Omega", "Ω"),
    // Operators
    ("\\sum", "∑"),
    ("\\prod", "∏"),
    ("\\coprod", "∐"),
    ("\\int", "∫"),
    ("\\oint", "∮"),
    ("\\iint", "∬"),
    ("\\iiint", "∭"),
    ("\\partial", "∂"),
    ("\\nabla", "∇"),
    ("\\pm", "±"),
    ("\\mp", "∓"),
    ("\\times", "×"),
    ("\\div", "÷"),
    ("\\setminus", "\\"),
    ("\\cdot", "·"),
    ("\\ast", "∗"),
    ("\\star", "★"),
    ("\\circ", "∘"),
    ("\\bullet", "•"),
    ("\\oplus", "⊕"),
    ("\\otimes", "⊗"),
    ("\\perp", "⊥"),
    ("\\parallel", "∥"),
    ("\\surd", "√"),
    // Relations
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\neq", "≠"),
    ("\\approx", "≈"),
    ("\\equiv", "≡"),
    ("\\cong", "≅"),
    ("\\sim", "∼"),
    ("\\propto", "∝"),
    ("\\prec", "≺"),
    ("\\succ", "≻"),
    ("\\preceq", "⪯"),
    ("\\succeq", "⪰"),
    ("\\ll", "≪"),
    ("\\gg", "≫"),
    // Sets
    ("\\in", "∈"),
    ("\\notin", "∉"),
    ("\\ni", "∋"),
    ("\\subset", "⊂"),
    ("\\supset", "⊃"),
    ("\\subseteq", "⊆"),
    ("\\supseteq", "⊇"),
    ("\\cup", "∪"),
    ("\\cap", "∩"),
    ("\\emptyset", "∅"),
    ("\\varnothing", "∅"),
    // Logic
    ("\\land", "∧"),
    ("\\lor", "∨"),
    ("\\lnot", "¬"),
    ("\\forall", "∀"),
    ("\\exists", "∃"),
    ("\\nexists", "∄"),
    ("\\therefore", "∴"),
    ("\\because", "∵"),
    // Arrows
    ("\\to", "→"),
    ("\\rightarrow", "→"),
    ("\\leftarrow", "←"),
    ("\\Rightarrow", "⇒"),
    ("\\Leftarrow", "⇐"),
    ("\\mapsto", "↦"),
    ("\\uparrow", "↑"),
    ("\\downarrow", "↓"),
    ("\\updownarrow", "↕"),
    ("\\leftrightarrow", "↔"),
    ("\\Leftrightarrow", "⇔"),
    // Miscellaneous
    ("\\infty", "∞"),
    ("\\aleph", "ℵ"),
    ("\\hbar", "ℏ"),
    ("\\ell", "ℓ"),
    ("\\wp", "℘"),
    ("\\Re", "ℜ"),
    ("\\Im", "ℑ"),
    ("\\angle", "∠"),
    ("\\measuredangle", "∡"),
    ("\\triangle", "△"),
    ("\\square", "□"),
    ("\\overline", "‾"),
    ("\\dots", "…"),
    ("\\cdots", "⋯"),
    ("\\vdots", "⋮"),
    ("\\ddots", "⋱"),
    // Escaped sub/superscript digits
    ("\\_0", "₀"),
    ("\\_1", "₁"),
    ("\\_2", "₂"),
    ("\\_3", "₃"),
    ("\\_4", "₄"),
    ("\\_5", "₅"),
    ("\\_6", "₆"),
    ("\\_7", "₇"),
    ("\\_8", "₈"),
    ("\\_9", "₉"),
    ("\\^0", "⁰"),
    ("\\^1", "¹"),
    ("\\^2", "²"),
    ("\\^3", "³"),
    ("\\^4", "⁴"),
    ("\\^5", "⁵"),
    ("\\^6", "⁶"),
    ("\\^7", "⁷"),
    ("\\^8", "⁸"),
    ("\\^9", "⁹"),
    // Accents, approximated inline
    ("\\vec", "→"),
    ("\\dot", "·"),
    ("\\ddot", "¨"),
    // Delimiters
    ("\\lbrace", "{"),
    ("\\rbrace", "}"),
    ("\\langle", "⟨"),
    ("\\rangle", "⟩"),
    ("\\lceil", "⌈"),
    ("\\rceil", "⌉"),
    ("\\lfloor", "⌊"),
    ("\\rfloor", "⌋"),
    // Physical constants
    ("\\varepsilon_0", "ε₀"),
    ("\\mu_0", "μ₀"),
];

/// Symbol table ordered longest key first, ties broken alphabetically.
pub(crate) static BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut pairs = SYMBOLS.to_vec();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    pairs
});

pub fn lookup(command: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(key, _)| *key == command)
        .map(|(_, glyph)| *glyph)
}

/// Superscript glyph for a single ASCII digit.
pub fn superscript(token: &str) -> Option<&'static str> {
    Some(match token {
        "0" => "⁰",
        "1" => "¹",
        "2" => "²",
        "3" => "³",
        "4" => "⁴",
        "5" => "⁵",
        "6" => "⁶",
        "7" => "⁷",
        "8" => "⁸",
        "9" => "⁹",
        _ => return None,
    })
}

/// Subscript glyph for a single digit or one of the index letters i, j, k, n, m.
pub fn subscript(token: &str) -> Option<&'static str> {
    Some(match token {
        "0" => "₀",
        "1" => "₁",
        "2" => "₂",
        "3" => "₃",
        "4" => "₄",
        "5" => "₅",
        "6" => "₆",
        "7" => "₇",
        "8" => "₈",
        "9" => "₉",
        "i" => "ᵢ",
        "j" => "ⱼ",
        "k" => "ₖ",
        "n" => "ₙ",
        "m" => "ₘ",
        _ => return None,
    })
}
