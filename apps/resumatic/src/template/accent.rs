//! Accent — single column with a strong accent header and timeline-style
//! entries.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct ModernAccent;

impl Template for ModernAccent {
    fn id(&self) -> &'static str {
        "modernaccent"
    }

    fn name(&self) -> &'static str {
        "Accent"
    }

    fn description(&self) -> &'static str {
        "Modern design with a strong accent color and timeline elements."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x1E, 0x3A, 0x8A)
    }

    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface {
        let mut blocks = vec![Block::Name(doc.personal.name.clone())];
        if let Some(title) = title_block(&doc.personal, opts) {
            blocks.push(title);
        }
        let contact = contact_lines(&doc.personal);
        if !contact.is_empty() {
            blocks.push(Block::Contact(vec![contact.join("  •  ")]));
        }
        blocks.push(Block::Rule);
        blocks.push(Block::Spacer(0.6));

        if !doc.personal.summary.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Summary".to_string(),
                ruled: false,
            });
            blocks.push(Block::Paragraph(doc.personal.summary.clone()));
            blocks.push(Block::Spacer(0.8));
        }

        if !doc.experience.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Experience".to_string(),
                ruled: false,
            });
            for exp in &doc.experience {
                blocks.push(Block::Entry {
                    primary: exp.position.clone(),
                    secondary: Some(exp.company.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(exp.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(exp.display_range()),
                    bullets: exp.bullets.clone(),
                });
                blocks.push(Block::Spacer(0.4));
            }
        }

        if !doc.education.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Education".to_string(),
                ruled: false,
            });
            for edu in &doc.education {
                blocks.push(Block::Entry {
                    primary: edu.school.clone(),
                    secondary: Some(edu.degree.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(edu.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(edu.display_range()),
                    bullets: vec![],
                });
                blocks.push(Block::Spacer(0.4));
            }
        }

        if !doc.skills.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Skills".to_string(),
                ruled: false,
            });
            blocks.push(Block::Chips(
                doc.skills.iter().map(|s| s.name.clone()).collect(),
            ));
            blocks.push(Block::Spacer(0.8));
        }

        if !doc.projects.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Projects".to_string(),
                ruled: false,
            });
            for project in &doc.projects {
                blocks.push(Block::Entry {
                    primary: project.name.clone(),
                    secondary: Some(project.description.clone()).filter(|s| !s.is_empty()),
                    tertiary: None,
                    meta: None,
                    bullets: project.bullets.clone(),
                });
            }
        }

        Surface {
            theme: Theme {
                font: FontClass::Sans,
                accent: self.accent(),
                page_background: Color::WHITE,
            },
            columns: vec![Column::full_width(blocks)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_document;

    #[test]
    fn test_header_is_ruled_off_from_body() {
        let surface = ModernAccent.render(&sample_document(), &RenderOptions::default());
        let rule_before_headings = surface
            .blocks()
            .position(|b| matches!(b, Block::Rule))
            .unwrap()
            < surface
                .blocks()
                .position(|b| matches!(b, Block::SectionHeading { .. }))
                .unwrap();
        assert!(rule_before_headings);
    }
}
