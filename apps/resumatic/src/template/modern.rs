//! Modern — single-column sans layout with unruled headings and skill pills.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct Modern;

impl Template for Modern {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn name(&self) -> &'static str {
        "Modern"
    }

    fn description(&self) -> &'static str {
        "Contemporary design with improved spacing and typography."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x3B, 0x82, 0xF6)
    }

    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface {
        let mut blocks = vec![Block::Name(doc.personal.name.clone())];
        if let Some(title) = title_block(&doc.personal, opts) {
            blocks.push(title);
        }
        let contact = contact_lines(&doc.personal);
        if !contact.is_empty() {
            blocks.push(Block::Contact(vec![contact.join("   ·   ")]));
        }
        blocks.push(Block::Spacer(1.0));

        if !doc.personal.summary.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "About".to_string(),
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
            }
            blocks.push(Block::Spacer(0.8));
        }

        if !doc.education.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Education".to_string(),
                ruled: false,
            });
            for edu in &doc.education {
                blocks.push(Block::Entry {
                    primary: edu.degree.clone(),
                    secondary: Some(edu.school.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(edu.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(edu.display_range()),
                    bullets: vec![],
                });
            }
            blocks.push(Block::Spacer(0.8));
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
