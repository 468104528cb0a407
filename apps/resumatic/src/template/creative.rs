//! Creative — bold sans layout on a softly tinted page.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct Creative;

impl Template for Creative {
    fn id(&self) -> &'static str {
        "creative"
    }

    fn name(&self) -> &'static str {
        "Creative"
    }

    fn description(&self) -> &'static str {
        "Bold, colorful design with modern styling elements."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x4F, 0x46, 0xE5)
    }

    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface {
        let mut blocks = vec![Block::Name(doc.personal.name.clone())];
        if let Some(title) = title_block(&doc.personal, opts) {
            blocks.push(title);
        }
        let contact = contact_lines(&doc.personal);
        if !contact.is_empty() {
            blocks.push(Block::Contact(contact));
        }
        blocks.push(Block::Spacer(1.2));

        if !doc.personal.summary.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Hello".to_string(),
                ruled: false,
            });
            blocks.push(Block::Paragraph(doc.personal.summary.clone()));
            blocks.push(Block::Spacer(1.0));
        }

        if !doc.skills.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Toolbox".to_string(),
                ruled: false,
            });
            blocks.push(Block::Chips(
                doc.skills.iter().map(|s| s.name.clone()).collect(),
            ));
            blocks.push(Block::Spacer(1.0));
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
            blocks.push(Block::Spacer(1.0));
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
            blocks.push(Block::Spacer(1.0));
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
        }

        Surface {
            theme: Theme {
                font: FontClass::Sans,
                accent: self.accent(),
                page_background: Color::rgb(0xFA, 0xFA, 0xFF),
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
    fn test_skills_lead_the_body_sections() {
        // Creative fronts the toolbox before the experience narrative.
        let surface = Creative.render(&sample_document(), &RenderOptions::default());
        let headings = surface.section_headings();
        let toolbox = headings.iter().position(|h| *h == "Toolbox").unwrap();
        let experience = headings.iter().position(|h| *h == "Experience").unwrap();
        assert!(toolbox < experience);
    }

    #[test]
    fn test_tinted_page_background() {
        let surface = Creative.render(&sample_document(), &RenderOptions::default());
        assert_ne!(surface.theme.page_background, Color::WHITE);
    }
}
