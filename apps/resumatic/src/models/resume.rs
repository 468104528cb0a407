//! The resume document aggregate.
//!
//! `ResumeDocument` is the single source of truth for one editing session.
//! It is owned by the session and replaced wholesale on every edit — editors
//! never mutate it in place. Invariants (unique stable ids, section caps,
//! non-empty bullet lists, clamped field lengths) are enforced at the edit
//! boundary in `crate::editor`; a document built through the editors
//! satisfies them at all times.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dates::format_date_range;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// Personal header fields. An empty `title` means "hidden" — there is no
/// separate boolean in the document; the visible toggle is ephemeral display
/// state owned by the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    /// Always `None` while `current` is true — enforced at write time.
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    /// 1–5 entries; the last bullet can be replaced but never removed.
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// 1–3 entries; never empty.
    pub bullets: Vec<String>,
}

impl EducationEntry {
    pub fn display_range(&self) -> String {
        format_date_range(self.start_date, self.end_date)
    }
}

impl ExperienceEntry {
    /// Date range for display. A current position ignores any stored end
    /// date and always renders as `"<start> - Present"`.
    pub fn display_range(&self) -> String {
        let end = if self.current { None } else { self.end_date };
        format_date_range(self.start_date, end)
    }
}
