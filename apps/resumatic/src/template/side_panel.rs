//! Side Panel — dark sidebar (contact, skills, education) beside the main
//! content column.

use crate::models::ResumeDocument;
use crate::layout::FontClass;
use crate::template::color::Color;
use crate::template::surface::{Block, Column, Surface, Theme};
use crate::template::{contact_lines, title_block, RenderOptions, Template};

pub struct SidePanel;

impl Template for SidePanel {
    fn id(&self) -> &'static str {
        "sidebyside"
    }

    fn name(&self) -> &'static str {
        "Side Panel"
    }

    fn description(&self) -> &'static str {
        "Two-column layout with a colored sidebar for visual impact."
    }

    fn accent(&self) -> Color {
        Color::rgb(0x1E, 0x29, 0x3B)
    }

    fn render(&self, doc: &ResumeDocument, opts: &RenderOptions) -> Surface {
        // Sidebar: identity and compact facts on the accent fill.
        let mut side = vec![Block::Name(doc.personal.name.clone())];
        if let Some(title) = title_block(&doc.personal, opts) {
            side.push(title);
        }
        let contact = contact_lines(&doc.personal);
        if !contact.is_empty() {
            side.push(Block::Spacer(0.6));
            side.push(Block::Contact(contact));
        }
        if !doc.skills.is_empty() {
            side.push(Block::Spacer(1.0));
            side.push(Block::SectionHeading {
                text: "Skills".to_string(),
                ruled: false,
            });
            side.push(Block::Chips(
                doc.skills.iter().map(|s| s.name.clone()).collect(),
            ));
        }
        if !doc.education.is_empty() {
            side.push(Block::Spacer(1.0));
            side.push(Block::SectionHeading {
                text: "Education".to_string(),
                ruled: false,
            });
            for edu in &doc.education {
                side.push(Block::Entry {
                    primary: edu.school.clone(),
                    secondary: Some(edu.degree.clone()).filter(|s| !s.is_empty()),
                    tertiary: Some(edu.location.clone()).filter(|s| !s.is_empty()),
                    meta: Some(edu.display_range()),
                    bullets: vec![],
                });
            }
        }

        // Main column: narrative sections.
        let mut main = Vec::new();
        if !doc.personal.summary.is_empty() {
            main.push(Block::SectionHeading {
                text: "Profile".to_string(),
                ruled: true,
            });
            main.push(Block::Paragraph(doc.personal.summary.clone()));
        }
        if !doc.experience.is_empty() {
            main.push(Block::SectionHeading {
                text: "Experience".to_string(),
                ruled: true,
            });
            for exp in &doc.experience {
                blocks_for_experience(&mut main, exp);
            }
        }
        if !doc.projects.is_empty() {
            main.push(Block::SectionHeading {
                text: "Projects".to_string(),
                ruled: true,
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
                font: FontClass::Sans,
                accent: self.accent(),
                page_background: Color::WHITE,
            },
            columns: vec![
                Column {
                    width_frac: 0.34,
                    background: Some(self.accent()),
                    foreground: Some(Color::WHITE),
                    blocks: side,
                },
                Column {
                    width_frac: 0.66,
                    background: None,
                    foreground: None,
                    blocks: main,
                },
            ],
        }
    }
}

fn blocks_for_experience(out: &mut Vec<Block>, exp: &crate::models::ExperienceEntry) {
    let employer = match (exp.company.is_empty(), exp.location.is_empty()) {
        (true, true) => None,
        (false, true) => Some(exp.company.clone()),
        (true, false) => Some(exp.location.clone()),
        (false, false) => Some(format!("{}, {}", exp.company, exp.location)),
    };
    out.push(Block::Entry {
        primary: exp.position.clone(),
        secondary: employer,
        tertiary: None,
        meta: Some(exp.display_range()),
        bullets: exp.bullets.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_document;

    #[test]
    fn test_two_columns_with_dark_sidebar() {
        let surface = SidePanel.render(&sample_document(), &RenderOptions::default());
        assert_eq!(surface.columns.len(), 2);
        assert_eq!(surface.columns[0].background, Some(SidePanel.accent()));
        assert_eq!(surface.columns[0].foreground, Some(Color::WHITE));
        assert!(surface.columns[1].background.is_none());
    }

    #[test]
    fn test_skills_and_education_live_in_sidebar() {
        let surface = SidePanel.render(&sample_document(), &RenderOptions::default());
        let sidebar_headings: Vec<_> = surface.columns[0]
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::SectionHeading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(sidebar_headings, vec!["Skills", "Education"]);
    }
}
