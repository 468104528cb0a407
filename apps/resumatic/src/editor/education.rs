//! Education editor. Max 3 entries; the last entry cannot be removed.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::limits;
use crate::models::{EducationEntry, ResumeDocument};

/// Typed field patch for a single education entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EducationField {
    School(String),
    Degree(String),
    Location(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
}

/// Appends a blank entry with a fresh id. No-op at the section cap.
pub fn add_entry(doc: &ResumeDocument) -> ResumeDocument {
    if doc.education.len() >= limits::MAX_EDUCATION_ENTRIES {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.education.push(EducationEntry {
        id: Uuid::new_v4(),
        school: String::new(),
        degree: String::new(),
        location: String::new(),
        start_date: None,
        end_date: None,
    });
    next
}

/// Removes the entry with `id`. No-op if it is the last entry or the id is
/// unknown.
pub fn remove_entry(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    if doc.education.len() <= limits::MIN_EDUCATION_ENTRIES {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.education.retain(|e| e.id != id);
    next
}

/// Replaces one field of the entry with `id`, leaving siblings untouched.
/// Unknown ids are a no-op.
pub fn update_entry(doc: &ResumeDocument, id: Uuid, field: EducationField) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
        match field {
            EducationField::School(v) => entry.school = limits::clamp(&v, limits::MAX_SCHOOL),
            EducationField::Degree(v) => entry.degree = limits::clamp(&v, limits::MAX_DEGREE),
            EducationField::Location(v) => {
                entry.location = limits::clamp(&v, limits::MAX_LOCATION)
            }
            EducationField::StartDate(d) => entry.start_date = d,
            EducationField::EndDate(d) => entry.end_date = d,
        }
    }
    next
}
