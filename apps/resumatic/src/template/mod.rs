//! Template contract and registry.
//!
//! A template is a pure function from `(document, options)` to a [`Surface`].
//! Every template surfaces the same information under the same
//! conditional-visibility rules — a section renders only if its data is
//! non-empty, the title honors `hide_title`, bullets keep stored order, and
//! dates go through the shared range formatting. Only arrangement and theme
//! differ, which is what makes templates interchangeable.

pub mod color;
pub mod surface;

mod accent;
mod classic;
mod creative;
mod minimal;
mod modern;
mod professional;
mod side_panel;
mod simple;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{PersonalInfo, ResumeDocument};

pub use color::Color;
pub use surface::{Block, Column, Surface, Theme};

/// Display options that are not part of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Suppress the professional title line without mutating the document.
    pub hide_title: bool,
}

pub trait Template: Send + Sync {
    /// Stable identifier used for selection.
    fn id(&self) -> &'static str;
    /// Display name.
    fn name(&self) -> &'static str;
    /// One-line description shown in the template picker.
    fn description(&self) -> &'static str;
    /// Accent color, also used as the picker swatch.
    fn accent(&self) -> Color;
    /// Pure render of the full document.
    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface;
}

/// Contact lines in display order, with empty fields dropped.
pub(crate) fn contact_lines(personal: &PersonalInfo) -> Vec<String> {
    [&personal.email, &personal.phone, &personal.location]
        .into_iter()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect()
}

/// Title block, honoring both the hide option and the empty-means-hidden
/// convention of the document itself.
pub(crate) fn title_block(personal: &PersonalInfo, opts: &RenderOptions) -> Option<Block> {
    if opts.hide_title || personal.title.is_empty() {
        None
    } else {
        Some(Block::Title(personal.title.clone()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// The available templates and the current selection.
///
/// Deliberately a plain value owned by the session — not a process-wide
/// singleton — so tests and embedders can hold independent registries.
pub struct TemplateRegistry {
    templates: Vec<Box<dyn Template>>,
    selected: Option<usize>,
}

impl TemplateRegistry {
    /// All built-in templates, in picker order. The first entry is the
    /// fallback used before any explicit selection.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Box::new(classic::Classic),
                Box::new(modern::Modern),
                Box::new(side_panel::SidePanel),
                Box::new(minimal::Minimal),
                Box::new(professional::Professional),
                Box::new(accent::ModernAccent),
                Box::new(creative::Creative),
                Box::new(simple::Simple),
            ],
            selected: None,
        }
    }

    pub fn templates(&self) -> &[Box<dyn Template>] {
        &self.templates
    }

    /// Selects a template by id.
    pub fn select(&mut self, id: &str) -> Result<(), AppError> {
        match self.templates.iter().position(|t| t.id() == id) {
            Some(idx) => {
                self.selected = Some(idx);
                Ok(())
            }
            None => Err(AppError::UnknownTemplate(id.to_string())),
        }
    }

    /// The current template, falling back to the first registered one when
    /// nothing has been selected yet.
    pub fn selected(&self) -> &dyn Template {
        let idx = self.selected.unwrap_or(0);
        self.templates[idx].as_ref()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{personal, personal::PersonalField, projects};
    use crate::models::sample_document;

    fn empty_document() -> ResumeDocument {
        let mut doc = sample_document();
        doc.personal.summary = String::new();
        doc.education.clear();
        doc.experience.clear();
        doc.skills.clear();
        doc.projects.clear();
        doc
    }

    #[test]
    fn test_builtin_order_and_ids() {
        let reg = TemplateRegistry::builtin();
        let ids: Vec<_> = reg.templates().iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec![
                "default",
                "modern",
                "sidebyside",
                "minimal",
                "professional",
                "modernaccent",
                "creative",
                "simple"
            ]
        );
    }

    #[test]
    fn test_fallback_is_first_template() {
        let reg = TemplateRegistry::builtin();
        assert_eq!(reg.selected().id(), "default");
    }

    #[test]
    fn test_select_known_and_unknown() {
        let mut reg = TemplateRegistry::builtin();
        reg.select("creative").unwrap();
        assert_eq!(reg.selected().id(), "creative");
        let err = reg.select("neon").unwrap_err();
        assert!(matches!(err, AppError::UnknownTemplate(_)));
        // Failed selection leaves the previous one in place.
        assert_eq!(reg.selected().id(), "creative");
    }

    #[test]
    fn test_every_template_renders_all_nonempty_sections() {
        let doc = sample_document();
        for template in TemplateRegistry::builtin().templates() {
            let surface = template.render(&doc, &RenderOptions::default());
            assert_eq!(
                surface.section_headings().len(),
                5,
                "template '{}' must render summary, experience, education, skills, projects",
                template.id()
            );
            assert!(surface.contains_text("John Doe"), "{}", template.id());
            assert!(
                surface.contains_text("Jul 2020 - Present"),
                "template '{}' must format the current role via the shared range rule",
                template.id()
            );
        }
    }

    #[test]
    fn test_every_template_omits_empty_sections() {
        let doc = empty_document();
        for template in TemplateRegistry::builtin().templates() {
            let surface = template.render(&doc, &RenderOptions::default());
            assert!(
                surface.section_headings().is_empty(),
                "template '{}' must omit every empty section, got {:?}",
                template.id(),
                surface.section_headings()
            );
        }
    }

    #[test]
    fn test_dropping_projects_drops_one_heading_everywhere() {
        let doc = sample_document();
        let without_projects = projects::remove_entry(&doc, doc.projects[0].id);
        for template in TemplateRegistry::builtin().templates() {
            let full = template.render(&doc, &RenderOptions::default());
            let reduced = template.render(&without_projects, &RenderOptions::default());
            assert_eq!(
                reduced.section_headings().len(),
                full.section_headings().len() - 1,
                "template '{}'",
                template.id()
            );
        }
    }

    #[test]
    fn test_hide_title_suppresses_without_mutation() {
        let doc = sample_document();
        let opts = RenderOptions { hide_title: true };
        for template in TemplateRegistry::builtin().templates() {
            let surface = template.render(&doc, &opts);
            let has_title_block = surface.blocks().any(|b| matches!(b, Block::Title(_)));
            assert!(!has_title_block, "template '{}'", template.id());
        }
        // Document untouched.
        assert_eq!(doc.personal.title, "Software Engineer");
    }

    #[test]
    fn test_empty_title_field_never_renders() {
        let doc = personal::update_field(
            &sample_document(),
            PersonalField::Title(String::new()),
        );
        for template in TemplateRegistry::builtin().templates() {
            let surface = template.render(&doc, &RenderOptions::default());
            let has_title_block = surface.blocks().any(|b| matches!(b, Block::Title(_)));
            assert!(!has_title_block, "template '{}'", template.id());
        }
    }

    #[test]
    fn test_bullets_keep_stored_order() {
        let doc = sample_document();
        let expected = &doc.experience[0].bullets;
        for template in TemplateRegistry::builtin().templates() {
            let surface = template.render(&doc, &RenderOptions::default());
            let rendered: Vec<&str> = surface
                .blocks()
                .filter_map(|b| match b {
                    Block::Entry { bullets, .. } if !bullets.is_empty() => Some(bullets),
                    _ => None,
                })
                .next()
                .map(|bullets| bullets.iter().map(String::as_str).collect())
                .unwrap_or_default();
            assert_eq!(
                rendered,
                expected.iter().map(String::as_str).collect::<Vec<_>>(),
                "template '{}'",
                template.id()
            );
        }
    }

    #[test]
    fn test_accent_colors_match_picker_swatches() {
        let reg = TemplateRegistry::builtin();
        let accents: Vec<_> = reg.templates().iter().map(|t| t.accent().to_hex()).collect();
        assert_eq!(
            accents,
            vec![
                "#0EA5E9", "#3B82F6", "#1E293B", "#6B7280", "#4B5563", "#1E3A8A", "#4F46E5",
                "#374151"
            ]
        );
    }
}
