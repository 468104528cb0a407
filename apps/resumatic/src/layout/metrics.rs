//! Static font-metric tables for the two preview font classes.
//!
//! Character widths are in em units (relative to font size). This is an
//! intentional approximation — the rasterizer uses the real glyph metrics of
//! whatever system font resolves, but static tables are enough to decide
//! where paragraph and bullet text wraps, and small residual error only
//! shifts a line break by a word. Tables cover ASCII 0x20..=0x7E; everything
//! else falls back to an average width.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font class
// ────────────────────────────────────────────────────────────────────────────

/// The two font classes templates choose between. Generic CSS family names
/// keep the rasterizer independent of which concrete fonts are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontClass {
    /// Humanist sans-serif; most templates.
    Sans,
    /// Old-style serif; the classic and simple templates.
    Serif,
}

impl FontClass {
    /// The SVG `font-family` value for this class.
    pub fn family(self) -> &'static str {
        match self {
            FontClass::Sans => "sans-serif",
            FontClass::Serif => "serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metric tables
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font class.
///
/// All widths are in em units at 1em. `widths[i]` = width of ASCII character
/// `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub class: FontClass,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units. Non-ASCII
    /// characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

/// Sans class — widths sampled from a humanist sans-serif at 1em.
static SANS_TABLE: FontMetricTable = FontMetricTable {
    class: FontClass::Sans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// Serif class — widths sampled from an old-style serif, roughly 85% of the
/// sans table.
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    class: FontClass::Serif,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

/// Returns the static metric table for a font class.
pub fn get_metrics(class: FontClass) -> &'static FontMetricTable {
    match class {
        FontClass::Sans => &SANS_TABLE,
        FontClass::Serif => &SERIF_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Greedy word-wrap
// ────────────────────────────────────────────────────────────────────────────

/// Splits `text` into display lines no wider than `max_width_em`.
///
/// Greedy word-wrap: words are packed onto a line until the next word would
/// overflow. A single word wider than the line gets a line of its own rather
/// than being broken mid-word. Empty or whitespace-only input yields no
/// lines.
pub fn wrap_lines(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.measure_str(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + metrics.space_width + word_w > max_width_em {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += metrics.space_width + word_w;
        }
    }
    lines.push(current);
    lines
}
