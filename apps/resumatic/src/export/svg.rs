//! Surface → SVG assembly.
//!
//! Lays a rendered surface out onto an 8.5in-wide page and emits SVG markup
//! for the rasterizer. All text placement uses the static metric tables in
//! `crate::layout`; the rasterizer substitutes real glyph metrics when it
//! draws, so the tables only decide where lines wrap.

use crate::layout::{get_metrics, wrap_lines, FontMetricTable};
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface};
use crate::export::PageSpec;

const DEFAULT_TEXT: Color = Color::rgb(0x1F, 0x29, 0x37);
const MUTED_TEXT: Color = Color::rgb(0x6B, 0x72, 0x80);
const INVERTED_MUTED_TEXT: Color = Color::rgb(0xE5, 0xE7, 0xEB);
const RULE_COLOR: Color = Color::rgb(0xDD, 0xDD, 0xDD);
const CHIP_FILL: Color = Color::rgb(0xF3, 0xF4, 0xF6);

const COLUMN_GUTTER: f32 = 24.0;
const PANEL_PAD: f32 = 16.0;

/// Escapes text for use inside an XML text node or attribute.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Assembles the full SVG document for a surface.
///
/// The page is `spec.width_px` wide; height grows with content but never
/// below `spec.min_height_px` (one US-letter page at 96 px/in).
pub fn surface_to_svg(surface: &Surface, spec: &PageSpec) -> String {
    let metrics = get_metrics(surface.theme.font);
    let usable = spec.width_px - 2.0 * spec.margin_px;

    // First pass: render every column body and measure its height.
    let mut columns: Vec<(ColumnGeometry, String, f32)> = Vec::new();
    let mut x_cursor = spec.margin_px;
    let multi = surface.columns.len() > 1;
    for (i, col) in surface.columns.iter().enumerate() {
        let outer_w = usable * col.width_frac;
        let gutter = if multi && i + 1 < surface.columns.len() {
            COLUMN_GUTTER
        } else {
            0.0
        };
        let pad = if col.background.is_some() { PANEL_PAD } else { 0.0 };
        let geom = ColumnGeometry {
            outer_x: x_cursor,
            outer_w,
            content_x: x_cursor + pad,
            content_w: outer_w - gutter - 2.0 * pad,
        };

        let mut painter = ColumnPainter::new(surface, col, &geom, spec, metrics);
        for block in &col.blocks {
            painter.paint(block);
        }
        let height = painter.y;
        columns.push((geom, painter.out, height));
        x_cursor += outer_w;
    }

    let content_height = columns
        .iter()
        .map(|(_, _, h)| *h)
        .fold(0.0_f32, f32::max)
        + spec.margin_px;
    let page_height = content_height.max(spec.min_height_px);

    // Second pass: assemble page background, panel fills, then the bodies.
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
         viewBox=\"0 0 {w:.0} {h:.0}\">\n",
        w = spec.width_px,
        h = page_height,
    ));
    out.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{:.0}\" height=\"{:.0}\" fill=\"{}\"/>\n",
        spec.width_px,
        page_height,
        surface.theme.page_background.to_hex()
    ));
    for (i, (geom, _, _)) in columns.iter().enumerate() {
        if let Some(bg) = surface.columns[i].background {
            // Panel fills bleed to the page edges for the sidebar look.
            let x = if i == 0 { 0.0 } else { geom.outer_x };
            let w = if i == 0 {
                geom.outer_x + geom.outer_w - COLUMN_GUTTER / 2.0
            } else {
                geom.outer_w
            };
            out.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"0\" width=\"{w:.1}\" height=\"{h:.0}\" fill=\"{fill}\"/>\n",
                h = page_height,
                fill = bg.to_hex()
            ));
        }
    }
    for (_, body, _) in &columns {
        out.push_str(body);
    }
    out.push_str("</svg>\n");
    out
}

struct ColumnGeometry {
    outer_x: f32,
    outer_w: f32,
    content_x: f32,
    content_w: f32,
}

/// Paints one column's blocks, tracking the vertical cursor.
struct ColumnPainter<'a> {
    out: String,
    y: f32,
    x: f32,
    width: f32,
    base: f32,
    family: &'static str,
    metrics: &'a FontMetricTable,
    text: Color,
    muted: Color,
    heading: Color,
    accent: Color,
    inverted: bool,
}

impl<'a> ColumnPainter<'a> {
    fn new(
        surface: &Surface,
        col: &Column,
        geom: &ColumnGeometry,
        spec: &PageSpec,
        metrics: &'a FontMetricTable,
    ) -> Self {
        let inverted = col.foreground.is_some();
        Self {
            out: String::new(),
            y: spec.margin_px,
            x: geom.content_x,
            width: geom.content_w,
            base: spec.base_font_px,
            family: surface.theme.font.family(),
            metrics,
            text: col.foreground.unwrap_or(DEFAULT_TEXT),
            muted: if inverted {
                INVERTED_MUTED_TEXT
            } else {
                MUTED_TEXT
            },
            heading: col.foreground.unwrap_or(surface.theme.accent),
            accent: surface.theme.accent,
            inverted,
        }
    }

    fn paint(&mut self, block: &Block) {
        match block {
            Block::Name(name) => {
                let fs = self.base * 2.2;
                self.text_at(self.x, self.y + fs, fs, 700, self.text, "start", name);
                self.y += fs * 1.25;
            }
            Block::Title(title) => {
                let fs = self.base * 1.2;
                self.text_at(self.x, self.y + fs, fs, 400, self.muted, "start", title);
                self.y += fs * 1.5;
            }
            Block::Contact(lines) => {
                let fs = self.base * 0.85;
                for line in lines {
                    self.text_at(self.x, self.y + fs, fs, 400, self.muted, "start", line);
                    self.y += fs * 1.5;
                }
            }
            Block::SectionHeading { text, ruled } => {
                self.y += self.base * 0.5;
                let fs = self.base * 1.05;
                self.text_at(self.x, self.y + fs, fs, 700, self.heading, "start", text);
                self.y += fs * 1.3;
                if *ruled {
                    self.rule_at(self.y);
                    self.y += 8.0;
                } else {
                    self.y += 4.0;
                }
            }
            Block::Paragraph(text) => {
                let fs = self.base * 0.92;
                for line in wrap_lines(text, self.metrics, self.width / fs) {
                    self.text_at(self.x, self.y + fs, fs, 400, self.text, "start", &line);
                    self.y += fs * 1.45;
                }
                self.y += 2.0;
            }
            Block::Entry {
                primary,
                secondary,
                tertiary,
                meta,
                bullets,
            } => self.paint_entry(primary, secondary, tertiary, meta, bullets),
            Block::Chips(items) => self.paint_chips(items),
            Block::Rule => {
                self.rule_at(self.y + 2.0);
                self.y += 12.0;
            }
            Block::Spacer(em) => {
                self.y += em * self.base;
            }
        }
    }

    fn paint_entry(
        &mut self,
        primary: &str,
        secondary: &Option<String>,
        tertiary: &Option<String>,
        meta: &Option<String>,
        bullets: &[String],
    ) {
        let fs = self.base;
        self.text_at(self.x, self.y + fs, fs, 700, self.text, "start", primary);
        if let Some(meta) = meta.as_deref().filter(|m| !m.is_empty()) {
            let mfs = self.base * 0.85;
            self.text_at(self.x + self.width, self.y + fs, mfs, 400, self.muted, "end", meta);
        }
        self.y += fs * 1.4;

        if let Some(secondary) = secondary {
            let sfs = self.base * 0.92;
            self.text_at(self.x, self.y + sfs, sfs, 400, self.text, "start", secondary);
            self.y += sfs * 1.4;
        }
        if let Some(tertiary) = tertiary {
            let tfs = self.base * 0.85;
            self.text_at(self.x, self.y + tfs, tfs, 400, self.muted, "start", tertiary);
            self.y += tfs * 1.4;
        }

        let bfs = self.base * 0.92;
        let indent = 14.0;
        for bullet in bullets.iter().filter(|b| !b.is_empty()) {
            let lines = wrap_lines(bullet, self.metrics, (self.width - indent) / bfs);
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    self.text_at(self.x, self.y + bfs, bfs, 400, self.muted, "start", "\u{2022}");
                }
                self.text_at(self.x + indent, self.y + bfs, bfs, 400, self.text, "start", line);
                self.y += bfs * 1.45;
            }
        }
        self.y += 6.0;
    }

    fn paint_chips(&mut self, items: &[String]) {
        let fs = self.base * 0.85;
        let chip_h = fs * 1.8;
        let pad_x = 10.0;
        let gap = 8.0;
        let (chip_fill, chip_text) = if self.inverted {
            (Color::WHITE, self.accent)
        } else {
            (CHIP_FILL, DEFAULT_TEXT)
        };

        let mut cx = self.x;
        for item in items {
            let w = self.metrics.measure_str(item) * fs + 2.0 * pad_x;
            if cx + w > self.x + self.width && cx > self.x {
                cx = self.x;
                self.y += chip_h + gap;
            }
            self.out.push_str(&format!(
                "<rect x=\"{cx:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" \
                 rx=\"{r:.1}\" fill=\"{fill}\"/>\n",
                y = self.y,
                h = chip_h,
                r = chip_h / 2.0,
                fill = chip_fill.to_hex()
            ));
            self.text_at(
                cx + pad_x,
                self.y + chip_h / 2.0 + fs * 0.35,
                fs,
                400,
                chip_text,
                "start",
                item,
            );
            cx += w + gap;
        }
        self.y += chip_h + 10.0;
    }

    fn rule_at(&mut self, y: f32) {
        let stroke = if self.inverted { self.muted } else { RULE_COLOR };
        self.out.push_str(&format!(
            "<line x1=\"{x1:.1}\" y1=\"{y:.1}\" x2=\"{x2:.1}\" y2=\"{y:.1}\" \
             stroke=\"{stroke}\" stroke-width=\"1\"/>\n",
            x1 = self.x,
            x2 = self.x + self.width,
            stroke = stroke.to_hex()
        ));
    }

    #[allow(clippy::too_many_arguments)]
    fn text_at(
        &mut self,
        x: f32,
        baseline: f32,
        size: f32,
        weight: u16,
        fill: Color,
        anchor: &str,
        content: &str,
    ) {
        if content.is_empty() {
            return;
        }
        self.out.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{baseline:.1}\" font-family=\"{family}\" \
             font-size=\"{size:.1}\" font-weight=\"{weight}\" fill=\"{fill}\" \
             text-anchor=\"{anchor}\">{content}</text>\n",
            family = self.family,
            fill = fill.to_hex(),
            content = xml_escape(content)
        ));
    }
}
