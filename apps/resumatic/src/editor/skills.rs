//! Skills editor. Max 10; names deduplicated case-insensitively.

use uuid::Uuid;

use crate::limits;
use crate::models::{ResumeDocument, Skill};

/// Appends a skill. Whitespace-only names, the section cap, and
/// case-insensitive duplicates are all silent no-ops. The stored name is
/// trimmed and clamped.
pub fn add_skill(doc: &ResumeDocument, name: &str) -> ResumeDocument {
    let trimmed = name.trim();
    if trimmed.is_empty() || doc.skills.len() >= limits::MAX_SKILLS {
        return doc.clone();
    }

    let lowered = trimmed.to_lowercase();
    let exists = doc.skills.iter().any(|s| s.name.to_lowercase() == lowered);
    if exists {
        return doc.clone();
    }

    let mut next = doc.clone();
    next.skills.push(Skill {
        id: Uuid::new_v4(),
        name: limits::clamp(trimmed, limits::MAX_SKILL_NAME),
    });
    next
}

/// Removes the skill with `id`. Unknown ids are a no-op; the skills list has
/// no minimum.
pub fn remove_skill(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    next.skills.retain(|s| s.id != id);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_document;

    #[test]
    fn test_case_insensitive_duplicate_is_noop() {
        // Sample already contains "JavaScript".
        let doc = sample_document();
        let after = add_skill(&doc, "javascript");
        assert_eq!(after.skills.len(), 6);
    }

    #[test]
    fn test_fresh_skill_appends_with_unique_id() {
        let doc = sample_document();
        let after = add_skill(&doc, "Rust");
        assert_eq!(after.skills.len(), 7);
        let added = after.skills.last().unwrap();
        assert_eq!(added.name, "Rust");
        assert!(doc.skills.iter().all(|s| s.id != added.id));
    }

    #[test]
    fn test_whitespace_name_is_noop() {
        let doc = sample_document();
        assert_eq!(add_skill(&doc, "   ").skills.len(), 6);
        assert_eq!(add_skill(&doc, "").skills.len(), 6);
    }

    #[test]
    fn test_name_is_trimmed_before_store_and_dedupe() {
        let doc = sample_document();
        let after = add_skill(&doc, "  Docker  ");
        assert_eq!(after.skills.last().unwrap().name, "Docker");
        let again = add_skill(&after, "docker ");
        assert_eq!(again.skills.len(), after.skills.len());
    }

    #[test]
    fn test_cap_of_ten_is_noop() {
        let mut doc = sample_document();
        for name in ["Rust", "Go", "Docker", "AWS"] {
            doc = add_skill(&doc, name);
        }
        assert_eq!(doc.skills.len(), limits::MAX_SKILLS);
        let after = add_skill(&doc, "Kubernetes");
        assert_eq!(after.skills.len(), limits::MAX_SKILLS);
    }

    #[test]
    fn test_name_clamped_to_thirty_chars() {
        let doc = sample_document();
        let long = "q".repeat(limits::MAX_SKILL_NAME * 2);
        let after = add_skill(&doc, &long);
        assert_eq!(
            after.skills.last().unwrap().name.chars().count(),
            limits::MAX_SKILL_NAME
        );
    }

    #[test]
    fn test_remove_skill_by_id() {
        let doc = sample_document();
        let id = doc.skills[0].id;
        let after = remove_skill(&doc, id);
        assert_eq!(after.skills.len(), 5);
        assert!(after.skills.iter().all(|s| s.id != id));
    }
}
