//! The editing session — all application state behind the wizard.
//!
//! One `Session` owns the document, the step controller, the template
//! registry, and the ephemeral display state. Nothing here is process-global:
//! embedders and tests hold independent sessions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::AppError;
use crate::export::{Exporter, PageSpec};
use crate::models::{sample_document, ResumeDocument};
use crate::notify::{Notifier, TracingNotifier};
use crate::template::{RenderOptions, Surface, Template, TemplateRegistry};
use crate::wizard::{Step, StepController};

pub struct Session {
    document: ResumeDocument,
    steps: StepController,
    registry: TemplateRegistry,
    /// Ephemeral display state, re-derived on every update: the title line
    /// is hidden exactly while the document's title field is empty.
    hide_title: bool,
    exporter: Exporter,
    notifier: Arc<dyn Notifier>,
}

impl Session {
    /// A fresh session: sample document, first wizard step, default
    /// template, notifications routed to `tracing`.
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(TracingNotifier))
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        let document = sample_document();
        let hide_title = document.personal.title.is_empty();
        Self {
            document,
            steps: StepController::new(),
            registry: TemplateRegistry::builtin(),
            hide_title,
            exporter: Exporter::new(PageSpec::letter()),
            notifier,
        }
    }

    // ── document ────────────────────────────────────────────────────────────

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Replaces the document wholesale — the only write path. The hidden-
    /// title display flag is re-derived from the new document.
    pub fn update(&mut self, next: ResumeDocument) {
        self.hide_title = next.personal.title.is_empty();
        self.document = next;
    }

    /// Convenience for reducer-style edits:
    /// `session.apply(|doc| skills::add_skill(doc, "Rust"))`.
    pub fn apply(&mut self, edit: impl FnOnce(&ResumeDocument) -> ResumeDocument) {
        let next = edit(&self.document);
        self.update(next);
    }

    pub fn hide_title(&self) -> bool {
        self.hide_title
    }

    // ── wizard ──────────────────────────────────────────────────────────────

    pub fn current_step(&self) -> Step {
        self.steps.current()
    }

    pub fn next_step(&mut self) {
        self.steps.next();
    }

    pub fn back_step(&mut self) {
        self.steps.back();
    }

    pub fn jump_to_step(&mut self, step: Step) -> bool {
        self.steps.jump_to(step)
    }

    // ── templates ───────────────────────────────────────────────────────────

    pub fn templates(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn select_template(&mut self, id: &str) -> Result<(), AppError> {
        self.registry.select(id)
    }

    pub fn selected_template(&self) -> &dyn Template {
        self.registry.selected()
    }

    /// Renders the live preview with the currently selected template.
    pub fn preview(&self) -> Surface {
        let opts = RenderOptions {
            hide_title: self.hide_title,
        };
        self.registry.selected().render(&self.document, &opts)
    }

    // ── export ──────────────────────────────────────────────────────────────

    /// Renders the preview and runs the export pipeline, writing
    /// `<Name>_Resume.pdf` into `out_dir`.
    pub async fn export_to(&self, out_dir: &Path) -> Result<PathBuf, AppError> {
        self.exporter
            .export(
                self.preview(),
                &self.document.personal.name,
                out_dir,
                self.notifier.as_ref(),
            )
            .await
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
