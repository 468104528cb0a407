//! Professional — two-column serif layout with a light facts panel.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct Professional;

impl Template for Professional {
    fn id(&self) -> &'static str {
        "professional"
    }

    fn name(&self) -> &'static str {
        "Professional"
    }

    fn description(&self) -> &'static str {
        "Elegant two-column layout with clear hierarchy and structure."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x4B, 0x55, 0x63)
    }

    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface {
        // Facts panel: contact, skills, education.
        let mut side = Vec::new();
        let contact = contact_lines(&doc.personal);
        if !contact.is_empty() {
            side.push(Block::Contact(contact));
            side.push(Block::Spacer(1.0));
        }
        if !doc.skills.is_empty() {
            side.push(Block::SectionHeading {
                text: "Skills".to_string(),
                ruled: false,
            });
            // One line per skill — restrained list, no pills.
            for skill in &doc.skills {
                side.push(Block::Paragraph(skill.name.clone()));
            }
            side.push(Block::Spacer(1.0));
        }
        if !doc.education.is_empty() {
            side.push(Block::SectionHeading {
                text: "Education".to_string(),
                ruled: false,
            });
            for edu in &doc.education {
                side.push(Block::Entry {
                    primary: edu.degree.clone(),
                    secondary: Some(edu.school.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(edu.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(edu.display_range()),
                    bullets: vec![],
                });
            }
        }

        // Main column: identity and narrative.
        let mut main = vec![Block::Name(doc.personal.name.clone())];
        if let Some(title) = title_block(&doc.personal, opts) {
            main.push(title);
        }
        main.push(Block::Rule);
        if !doc.personal.summary.is_empty() {
            main.push(Block::SectionHeading {
                text: "Profile".to_string(),
                ruled: false,
            });
            main.push(Block::Paragraph(doc.personal.summary.clone()));
            main.push(Block::Spacer(0.8));
        }
        if !doc.experience.is_empty() {
            main.push(Block::SectionHeading {
                text: "Work Experience".to_string(),
                ruled: false,
            });
            for exp in &doc.experience {
                main.push(Block::Entry {
                    primary: exp.position.clone(),
                    secondary: Some(exp.company.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(exp.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(exp.display_range()),
                    bullets: exp.bullets.clone(),
                });
            }
            main.push(Block::Spacer(0.8));
        }
        if !doc.projects.is_empty() {
            main.push(Block::SectionHeading {
                text: "Projects".to_string(),
                ruled: false,
            });
            for project in &doc.projects {
                main.push(Block::Entry {
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
                font: FontClass::Serif,
                accent: self.accent(),
                page_background: Color::WHITE,
            },
            columns: vec![
                Column {
                    width_frac: 0.3,
                    background: Some(Color::gray(0xF3)),
                    foreground: None,
                    blocks: side,
                },
                Column {
                    width_frac: 0.7,
                    background: None,
                    foreground: None,
                    blocks: main,
                },
            ],
        }
    }
}
