//! Minimal — quiet single-column layout, ruled headings, skills as pills.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct Minimal;

impl Template for Minimal {
    fn id(&self) -> &'static str {
        "minimal"
    }

    fn name(&self) -> &'static str {
        "Minimal"
    }

    fn description(&self) -> &'static str {
        "Clean and minimalist design focusing on content clarity."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x6B, 0x72, 0x80)
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
        blocks.push(Block::Spacer(1.0));

        if !doc.personal.summary.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Profile".to_string(),
                ruled: true,
            });
            blocks.push(Block::Paragraph(doc.personal.summary.clone()));
        }

        if !doc.experience.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Employment History".to_string(),
                ruled: true,
            });
            for exp in &doc.experience {
                let employer = match (exp.company.is_empty(), exp.location.is_empty()) {
                    (true, true) => None,
                    (false, true) => Some(exp.company.clone()),
                    (true, false) => Some(exp.location.clone()),
                    (false, false) => Some(format!("{}, {}", exp.company, exp.location)),
                };
                blocks.push(Block::Entry {
                    primary: exp.position.clone(),
                    secondary: employer,
                    tertiary: None,
                    meta: Some(exp.display_range()),
                    bullets: exp.bullets.clone(),
                });
            }
        }

        if !doc.education.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Education".to_string(),
                ruled: true,
            });
            for edu in &doc.education {
                blocks.push(Block::Entry {
                    primary: edu.school.clone(),
                    secondary: Some(edu.degree.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(edu.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(edu.display_range()),
                    bullets: vec![],
                });
            }
        }

        if !doc.skills.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Skills".to_string(),
                ruled: true,
            });
            blocks.push(Block::Chips(
                doc.skills.iter().map(|s| s.name.clone()).collect(),
            ));
        }

        if !doc.projects.is_empty() {
            blocks.push(Block::SectionHeading {
                text: "Projects".to_string(),
                ruled: true,
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
    fn test_heading_names() {
        let surface = Minimal.render(&sample_document(), &RenderOptions::default());
        assert_eq!(
            surface.section_headings(),
            vec!["Profile", "Employment History", "Education", "Skills", "Projects"]
        );
    }

    #[test]
    fn test_all_headings_ruled() {
        let surface = Minimal.render(&sample_document(), &RenderOptions::default());
        for block in surface.blocks() {
            if let Block::SectionHeading { ruled, .. } = block {
                assert!(ruled);
            }
        }
    }
}
