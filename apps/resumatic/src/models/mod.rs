pub mod dates;
pub mod resume;
pub mod sample;

pub use dates::{format_date, format_date_range, month_year};
pub use resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, Project, ResumeDocument, Skill,
};
pub use sample::sample_document;
