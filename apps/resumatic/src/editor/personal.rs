//! Personal-info editor. One clamped setter per header field.

use crate::limits;
use crate::models::ResumeDocument;

/// Typed field patch for the personal section.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonalField {
    Name(String),
    Title(String),
    Email(String),
    Phone(String),
    Location(String),
    Summary(String),
}

/// Replaces one personal field, clamped to its cap. Clearing `Title` to an
/// empty string is how the title is hidden — the document carries no
/// separate visibility flag.
pub fn update_field(doc: &ResumeDocument, field: PersonalField) -> ResumeDocument {
    let mut next = doc.clone();
    match field {
        PersonalField::Name(v) => next.personal.name = limits::clamp(&v, limits::MAX_NAME),
        PersonalField::Title(v) => next.personal.title = limits::clamp(&v, limits::MAX_TITLE),
        PersonalField::Email(v) => next.personal.email = limits::clamp(&v, limits::MAX_EMAIL),
        PersonalField::Phone(v) => next.personal.phone = limits::clamp(&v, limits::MAX_PHONE),
        PersonalField::Location(v) => {
            next.personal.location = limits::clamp(&v, limits::MAX_LOCATION)
        }
        PersonalField::Summary(v) => {
            next.personal.summary = limits::clamp(&v, limits::MAX_SUMMARY)
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_document;

    #[test]
    fn test_set_name_replaces_only_name() {
        let doc = sample_document();
        let next = update_field(&doc, PersonalField::Name("Jane Roe".to_string()));
        assert_eq!(next.personal.name, "Jane Roe");
        assert_eq!(next.personal.email, doc.personal.email);
        assert_eq!(next.experience, doc.experience);
    }

    #[test]
    fn test_over_long_summary_is_truncated_not_rejected() {
        let doc = sample_document();
        let long = "a".repeat(limits::MAX_SUMMARY + 100);
        let next = update_field(&doc, PersonalField::Summary(long));
        assert_eq!(next.personal.summary.chars().count(), limits::MAX_SUMMARY);
    }

    #[test]
    fn test_clearing_title_hides_it_destructively() {
        let doc = sample_document();
        let next = update_field(&doc, PersonalField::Title(String::new()));
        assert!(next.personal.title.is_empty());
        // The original text is gone from the document — hiding is destructive.
        assert_ne!(next.personal.title, doc.personal.title);
    }

    #[test]
    fn test_original_document_untouched() {
        let doc = sample_document();
        let _ = update_field(&doc, PersonalField::Phone("(999) 999-9999".to_string()));
        assert_eq!(doc.personal.phone, "(123) 456-7890");
    }
}
