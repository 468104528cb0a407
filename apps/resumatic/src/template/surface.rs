//! The surface IR — what a template render produces.
//!
//! A `Surface` is a backend-neutral visual tree: a theme plus one or more
//! vertical columns of blocks, in reading order. The export pipeline lays it
//! out and rasterizes it; tests inspect it structurally. Templates differ in
//! how they arrange blocks and style the theme, never in which document
//! fields they surface.

use serde::{Deserialize, Serialize};

use crate::layout::FontClass;
use crate::template::color::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub theme: Theme,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font: FontClass,
    pub accent: Color,
    pub page_background: Color,
}

/// One vertical band of the page. Single-column templates use one column of
/// fraction 1.0; panel layouts use two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Fraction of the usable page width, (0, 1].
    pub width_frac: f32,
    /// Panel fill behind this column, if any.
    pub background: Option<Color>,
    /// Text color override for this column (e.g. white on a dark panel).
    pub foreground: Option<Color>,
    pub blocks: Vec<Block>,
}

impl Column {
    pub fn full_width(blocks: Vec<Block>) -> Self {
        Self {
            width_frac: 1.0,
            background: None,
            foreground: None,
            blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// The person's name — the one block every surface carries.
    Name(String),
    /// The professional title line; omitted entirely when hidden or empty.
    Title(String),
    /// Contact lines (email, phone, location), already filtered of empties.
    Contact(Vec<String>),
    /// A section heading; `ruled` draws a separator under it.
    SectionHeading { text: String, ruled: bool },
    Paragraph(String),
    /// One dated entry (experience, education, or project).
    Entry {
        primary: String,
        secondary: Option<String>,
        tertiary: Option<String>,
        /// Date range or other right-aligned metadata.
        meta: Option<String>,
        bullets: Vec<String>,
    },
    /// Pill-styled short items (skills).
    Chips(Vec<String>),
    /// A horizontal separator across the column.
    Rule,
    /// Vertical whitespace in em units.
    Spacer(f32),
}

impl Surface {
    /// All blocks across all columns, reading order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.columns.iter().flat_map(|c| c.blocks.iter())
    }

    /// True when no column carries any block — nothing to render or export.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.blocks.is_empty())
    }

    /// Section heading texts, in reading order. Structural probe used by
    /// contract tests: one heading per non-empty document section.
    pub fn section_headings(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::SectionHeading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True if any block renders the given text verbatim (headings, names,
    /// titles, paragraphs, entry fields, chips, contact lines, bullets).
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks().any(|b| match b {
            Block::Name(t) | Block::Title(t) | Block::Paragraph(t) => t == needle,
            Block::SectionHeading { text, .. } => text == needle,
            Block::Contact(lines) => lines.iter().any(|l| l == needle),
            Block::Chips(items) => items.iter().any(|i| i == needle),
            Block::Entry {
                primary,
                secondary,
                tertiary,
                meta,
                bullets,
            } => {
                primary == needle
                    || secondary.as_deref() == Some(needle)
                    || tertiary.as_deref() == Some(needle)
                    || meta.as_deref() == Some(needle)
                    || bullets.iter().any(|b| b == needle)
            }
            Block::Rule | Block::Spacer(_) => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme {
            font: FontClass::Sans,
            accent: Color::rgb(14, 165, 233),
            page_background: Color::WHITE,
        }
    }

    #[test]
    fn test_empty_surface_detection() {
        let s = Surface {
            theme: theme(),
            columns: vec![Column::full_width(vec![])],
        };
        assert!(s.is_empty());

        let s = Surface {
            theme: theme(),
            columns: vec![Column::full_width(vec![Block::Name("John".to_string())])],
        };
        assert!(!s.is_empty());
    }

    #[test]
    fn test_section_headings_cross_columns() {
        let s = Surface {
            theme: theme(),
            columns: vec![
                Column {
                    width_frac: 0.33,
                    background: Some(Color::gray(30)),
                    foreground: Some(Color::WHITE),
                    blocks: vec![Block::SectionHeading {
                        text: "Skills".to_string(),
                        ruled: false,
                    }],
                },
                Column {
                    width_frac: 0.67,
                    background: None,
                    foreground: None,
                    blocks: vec![Block::SectionHeading {
                        text: "Experience".to_string(),
                        ruled: true,
                    }],
                },
            ],
        };
        assert_eq!(s.section_headings(), vec!["Skills", "Experience"]);
    }

    #[test]
    fn test_contains_text_reaches_entry_fields() {
        let s = Surface {
            theme: theme(),
            columns: vec![Column::full_width(vec![Block::Entry {
                primary: "Software Engineer".to_string(),
                secondary: Some("Tech Solutions Inc.".to_string()),
                tertiary: None,
                meta: Some("Jul 2020 - Present".to_string()),
                bullets: vec!["Shipped the thing".to_string()],
            }])],
        };
        assert!(s.contains_text("Jul 2020 - Present"));
        assert!(s.contains_text("Shipped the thing"));
        assert!(!s.contains_text("Jan 1999"));
    }
}
