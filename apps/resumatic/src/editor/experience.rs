//! Experience editor. Max 3 entries, 1–5 bullets each.
//!
//! The one cross-field rule in the document lives here: marking a position
//! as current clears its end date in the same replacement document, so the
//! `current == true ⇒ end_date == None` invariant can never be observed
//! broken. Unmarking leaves the end date `None` — the user picks a new one.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::limits;
use crate::models::{ExperienceEntry, ResumeDocument};

/// Typed field patch for a single experience entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceField {
    Company(String),
    Position(String),
    Location(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Current(bool),
}

/// Appends a blank entry with a fresh id and a single empty bullet. No-op at
/// the section cap.
pub fn add_entry(doc: &ResumeDocument) -> ResumeDocument {
    if doc.experience.len() >= limits::MAX_EXPERIENCE_ENTRIES {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.experience.push(ExperienceEntry {
        id: Uuid::new_v4(),
        company: String::new(),
        position: String::new(),
        location: String::new(),
        start_date: None,
        end_date: None,
        current: false,
        bullets: vec![String::new()],
    });
    next
}

/// Removes the entry with `id`. No-op if it is the last entry or the id is
/// unknown.
pub fn remove_entry(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    if doc.experience.len() <= limits::MIN_EXPERIENCE_ENTRIES {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.experience.retain(|e| e.id != id);
    next
}

/// Replaces one field of the entry with `id`. `Current(true)` atomically
/// clears the end date. Unknown ids are a no-op.
pub fn update_entry(doc: &ResumeDocument, id: Uuid, field: ExperienceField) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        match field {
            ExperienceField::Company(v) => entry.company = limits::clamp(&v, limits::MAX_COMPANY),
            ExperienceField::Position(v) => {
                entry.position = limits::clamp(&v, limits::MAX_POSITION)
            }
            ExperienceField::Location(v) => {
                entry.location = limits::clamp(&v, limits::MAX_LOCATION)
            }
            ExperienceField::StartDate(d) => entry.start_date = d,
            ExperienceField::EndDate(d) => entry.end_date = d,
            ExperienceField::Current(flag) => {
                entry.current = flag;
                if flag {
                    entry.end_date = None;
                }
            }
        }
    }
    next
}

/// Appends an empty bullet to the entry with `id`. No-op at the bullet cap
/// or for unknown ids.
pub fn add_bullet(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        if entry.bullets.len() < limits::MAX_EXPERIENCE_BULLETS {
            entry.bullets.push(String::new());
        }
    }
    next
}

/// Removes the bullet at `index`. No-op when it would empty the list, when
/// the index is out of range, or for unknown ids.
pub fn remove_bullet(doc: &ResumeDocument, id: Uuid, index: usize) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        if entry.bullets.len() > limits::MIN_BULLETS && index < entry.bullets.len() {
            entry.bullets.remove(index);
        }
    }
    next
}

/// Replaces the bullet text at `index`, clamped. No-op for out-of-range
/// indices and unknown ids.
pub fn set_bullet(doc: &ResumeDocument, id: Uuid, index: usize, text: &str) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        if let Some(slot) = entry.bullets.get_mut(index) {
            *slot = limits::clamp(text, limits::MAX_BULLET);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{month_year, sample_document};

    #[test]
    fn test_add_entry_defaults() {
        let doc = sample_document();
        let next = add_entry(&doc);
        assert_eq!(next.experience.len(), 3);
        let added = next.experience.last().unwrap();
        assert!(!added.current);
        assert_eq!(added.bullets, vec![String::new()]);
    }

    #[test]
    fn test_add_entry_noop_at_cap() {
        let doc = add_entry(&sample_document());
        assert_eq!(doc.experience.len(), limits::MAX_EXPERIENCE_ENTRIES);
        let after = add_entry(&doc);
        assert_eq!(after.experience.len(), limits::MAX_EXPERIENCE_ENTRIES);
    }

    #[test]
    fn test_setting_current_clears_end_date() {
        let doc = sample_document();
        // exp[1] is the past role with a real end date.
        let id = doc.experience[1].id;
        assert!(doc.experience[1].end_date.is_some());
        let next = update_entry(&doc, id, ExperienceField::Current(true));
        assert!(next.experience[1].current);
        assert!(next.experience[1].end_date.is_none());
    }

    #[test]
    fn test_unsetting_current_leaves_end_date_none() {
        let doc = sample_document();
        let id = doc.experience[0].id; // current role, end_date None
        let next = update_entry(&doc, id, ExperienceField::Current(false));
        assert!(!next.experience[0].current);
        assert!(next.experience[0].end_date.is_none());
    }

    #[test]
    fn test_set_end_date_on_past_role() {
        let doc = sample_document();
        let id = doc.experience[1].id;
        let next = update_entry(&doc, id, ExperienceField::EndDate(month_year(2021, 1)));
        assert_eq!(next.experience[1].end_date, month_year(2021, 1));
    }

    #[test]
    fn test_bullet_add_up_to_cap_then_noop() {
        let mut doc = sample_document();
        let id = doc.experience[0].id;
        // Sample starts with 3 bullets; two adds reach the cap of 5.
        doc = add_bullet(&doc, id);
        doc = add_bullet(&doc, id);
        assert_eq!(doc.experience[0].bullets.len(), limits::MAX_EXPERIENCE_BULLETS);
        let after = add_bullet(&doc, id);
        assert_eq!(after.experience[0].bullets.len(), limits::MAX_EXPERIENCE_BULLETS);
    }

    #[test]
    fn test_remove_last_bullet_is_noop() {
        let mut doc = sample_document();
        let id = doc.experience[0].id;
        doc = remove_bullet(&doc, id, 0);
        doc = remove_bullet(&doc, id, 0);
        assert_eq!(doc.experience[0].bullets.len(), 1);
        let after = remove_bullet(&doc, id, 0);
        assert_eq!(after.experience[0].bullets.len(), 1, "bullet floor is 1");
    }

    #[test]
    fn test_remove_bullet_out_of_range_is_noop() {
        let doc = sample_document();
        let id = doc.experience[0].id;
        let after = remove_bullet(&doc, id, 99);
        assert_eq!(after, doc);
    }

    #[test]
    fn test_set_bullet_clamps_text() {
        let doc = sample_document();
        let id = doc.experience[0].id;
        let long = "b".repeat(limits::MAX_BULLET + 20);
        let next = set_bullet(&doc, id, 0, &long);
        assert_eq!(
            next.experience[0].bullets[0].chars().count(),
            limits::MAX_BULLET
        );
    }

    #[test]
    fn test_remove_entry_floor_of_one() {
        let doc = sample_document();
        let first = remove_entry(&doc, doc.experience[0].id);
        assert_eq!(first.experience.len(), 1);
        let id = first.experience[0].id;
        let after = remove_entry(&first, id);
        assert_eq!(after.experience.len(), 1);
    }
}
