//! The built-in sample document.
//!
//! A fresh session starts from this document rather than an empty one so the
//! live preview is never blank.

use uuid::Uuid;

use crate::models::dates::month_year;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, Project, ResumeDocument, Skill,
};

/// Builds the sample resume a new session starts from. Ids are freshly
/// generated on each call.
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        personal: PersonalInfo {
            name: "John Doe".to_string(),
            title: "Software Engineer".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            location: "New York, NY".to_string(),
            summary: "Experienced software engineer with a passion for building user-friendly \
                      applications and solving complex problems."
                .to_string(),
        },
        education: vec![EducationEntry {
            id: Uuid::new_v4(),
            school: "University of Technology".to_string(),
            degree: "Bachelor of Science in Computer Science".to_string(),
            location: "New York, NY".to_string(),
            start_date: month_year(2016, 9),
            end_date: month_year(2020, 6),
        }],
        experience: vec![
            ExperienceEntry {
                id: Uuid::new_v4(),
                company: "Tech Solutions Inc.".to_string(),
                position: "Software Engineer".to_string(),
                location: "New York, NY".to_string(),
                start_date: month_year(2020, 7),
                end_date: None,
                current: true,
                bullets: vec![
                    "Developed and maintained web applications using React and TypeScript"
                        .to_string(),
                    "Collaborated with cross-functional teams to implement new features"
                        .to_string(),
                    "Improved application performance by 30% by optimizing database queries"
                        .to_string(),
                ],
            },
            ExperienceEntry {
                id: Uuid::new_v4(),
                company: "Startup Innovations".to_string(),
                position: "Junior Developer".to_string(),
                location: "Boston, MA".to_string(),
                start_date: month_year(2019, 6),
                end_date: month_year(2020, 6),
                current: false,
                bullets: vec![
                    "Built responsive web interfaces using HTML, CSS, and JavaScript".to_string(),
                    "Participated in code reviews and implemented feedback from senior developers"
                        .to_string(),
                    "Assisted in the development of RESTful APIs using Node.js".to_string(),
                ],
            },
        ],
        skills: ["JavaScript", "TypeScript", "React", "Node.js", "SQL", "Git"]
            .iter()
            .map(|name| Skill {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect(),
        projects: vec![Project {
            id: Uuid::new_v4(),
            name: "E-commerce Platform".to_string(),
            description: "A full-stack e-commerce application".to_string(),
            bullets: vec![
                "Implemented user authentication and product management features".to_string(),
                "Integrated payment processing with Stripe".to_string(),
                "Designed responsive UI with a focus on mobile-first experience".to_string(),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits;

    #[test]
    fn test_sample_has_every_section_populated() {
        let doc = sample_document();
        assert!(!doc.personal.name.is_empty());
        assert!(!doc.personal.summary.is_empty());
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.skills.len(), 6);
        assert_eq!(doc.projects.len(), 1);
    }

    #[test]
    fn test_sample_respects_limits() {
        let doc = sample_document();
        assert!(doc.personal.name.chars().count() <= limits::MAX_NAME);
        assert!(doc.personal.summary.chars().count() <= limits::MAX_SUMMARY);
        assert!(doc.skills.len() <= limits::MAX_SKILLS);
        for exp in &doc.experience {
            assert!(!exp.bullets.is_empty() && exp.bullets.len() <= limits::MAX_EXPERIENCE_BULLETS);
            for b in &exp.bullets {
                assert!(b.chars().count() <= limits::MAX_BULLET);
            }
        }
        for proj in &doc.projects {
            assert!(!proj.bullets.is_empty() && proj.bullets.len() <= limits::MAX_PROJECT_BULLETS);
        }
    }

    #[test]
    fn test_sample_current_role_has_no_end_date() {
        let doc = sample_document();
        let current = doc.experience.iter().find(|e| e.current).unwrap();
        assert!(current.end_date.is_none());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let doc = sample_document();
        let mut ids: Vec<_> = doc
            .education
            .iter()
            .map(|e| e.id)
            .chain(doc.experience.iter().map(|e| e.id))
            .chain(doc.skills.iter().map(|s| s.id))
            .chain(doc.projects.iter().map(|p| p.id))
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before, "sample ids must be unique");
    }
}
