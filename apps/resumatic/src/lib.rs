//! Resumatic — a guided, multi-step resume builder core.
//!
//! The crate models one editing session: a [`ResumeDocument`] edited through
//! reducer-style section editors, a linear step wizard, a registry of
//! interchangeable visual templates, and an export pipeline that captures
//! the rendered preview as a raster image and packages it into a US-letter
//! PDF.
//!
//! There is no server, storage, or CLI surface — the public API is the
//! in-process [`Session`] and the file the export writes.

pub mod editor;
pub mod errors;
pub mod export;
pub mod layout;
pub mod limits;
pub mod models;
pub mod notify;
pub mod session;
pub mod template;
pub mod wizard;

pub use errors::AppError;
pub use models::{sample_document, ResumeDocument};
pub use session::Session;
pub use template::{RenderOptions, Surface, Template, TemplateRegistry};
pub use wizard::{Step, StepController};
