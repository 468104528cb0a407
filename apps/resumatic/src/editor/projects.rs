//! Projects editor. Max 2 entries, 1–3 bullets each.
//!
//! Unlike education and experience, the projects list has no floor — the
//! last project may be removed and the section disappears from every
//! template.

use uuid::Uuid;

use crate::limits;
use crate::models::{Project, ResumeDocument};

/// Typed field patch for a single project.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectField {
    Name(String),
    Description(String),
}

/// Appends a blank project with a fresh id and a single empty bullet. No-op
/// at the section cap.
pub fn add_entry(doc: &ResumeDocument) -> ResumeDocument {
    if doc.projects.len() >= limits::MAX_PROJECTS {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.projects.push(Project {
        id: Uuid::new_v4(),
        name: String::new(),
        description: String::new(),
        bullets: vec![String::new()],
    });
    next
}

/// Removes the project with `id`. Unknown ids are a no-op.
pub fn remove_entry(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    next.projects.retain(|p| p.id != id);
    next
}

/// Replaces one field of the project with `id`. Unknown ids are a no-op.
pub fn update_entry(doc: &ResumeDocument, id: Uuid, field: ProjectField) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
        match field {
            ProjectField::Name(v) => project.name = limits::clamp(&v, limits::MAX_PROJECT_NAME),
            ProjectField::Description(v) => {
                project.description = limits::clamp(&v, limits::MAX_PROJECT_DESCRIPTION)
            }
        }
    }
    next
}

/// Appends an empty bullet. No-op at the bullet cap or for unknown ids.
pub fn add_bullet(doc: &ResumeDocument, id: Uuid) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
        if project.bullets.len() < limits::MAX_PROJECT_BULLETS {
            project.bullets.push(String::new());
        }
    }
    next
}

/// Removes the bullet at `index`. No-op when it would empty the list, when
/// the index is out of range, or for unknown ids.
pub fn remove_bullet(doc: &ResumeDocument, id: Uuid, index: usize) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
        if project.bullets.len() > limits::MIN_BULLETS && index < project.bullets.len() {
            project.bullets.remove(index);
        }
    }
    next
}

/// Replaces the bullet text at `index`, clamped. No-op for out-of-range
/// indices and unknown ids.
pub fn set_bullet(doc: &ResumeDocument, id: Uuid, index: usize, text: &str) -> ResumeDocument {
    let mut next = doc.clone();
    if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
        if let Some(slot) = project.bullets.get_mut(index) {
            *slot = limits::clamp(text, limits::MAX_BULLET);
        }
    }
    next
}
