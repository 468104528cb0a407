//! Export pipeline: surface → SVG → raster capture → paginated PDF.
//!
//! # Architecture
//! - `Exporter::export` is the public async entry point.
//! - Capture and packaging are CPU-bound and run via
//!   `tokio::task::spawn_blocking`.
//! - A `tokio::sync::Mutex` serializes exports — a second invocation waits
//!   for the first instead of racing it on the output file.
//! - Progress and terminal failures surface through the `Notifier` seam;
//!   errors abort without partial output.

pub mod pdf;
pub mod raster;
pub mod svg;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::notify::{Notification, Notifier};
use crate::template::Surface;

// ────────────────────────────────────────────────────────────────────────────
// Page specification
// ────────────────────────────────────────────────────────────────────────────

/// Layout and packaging parameters for the export pipeline.
///
/// Pixel values are CSS-style 96 px/in; a US-letter page is 816 × 1056.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page width of the assembled SVG.
    pub width_px: f32,
    /// Minimum page height; content can grow past it and gets paginated.
    pub min_height_px: f32,
    /// Outer margin of the assembled SVG.
    pub margin_px: f32,
    /// Base font size; block sizes scale from it.
    pub base_font_px: f32,
    /// Fixed raster upscale factor for the capture step.
    pub raster_scale: f32,
    /// PDF page margin in points.
    pub pdf_margin_pt: f32,
}

impl PageSpec {
    /// US letter at 96 px/in, 0.5in SVG margins, 2× capture, 20pt PDF margins.
    pub fn letter() -> Self {
        Self {
            width_px: 816.0,
            min_height_px: 1056.0,
            margin_px: 48.0,
            base_font_px: 12.0,
            raster_scale: 2.0,
            pdf_margin_pt: 20.0,
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::letter()
    }
}

/// Output filename: whitespace runs in the person's name become underscores.
pub fn export_filename(person_name: &str) -> String {
    let joined = person_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{joined}_Resume.pdf")
}

// ────────────────────────────────────────────────────────────────────────────
// Exporter
// ────────────────────────────────────────────────────────────────────────────

pub struct Exporter {
    spec: PageSpec,
    /// Serializes exports; held across the whole capture+package run.
    running: Mutex<()>,
}

impl Exporter {
    pub fn new(spec: PageSpec) -> Self {
        Self {
            spec,
            running: Mutex::new(()),
        }
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    /// Runs the full pipeline and returns the path of the written PDF.
    ///
    /// An empty surface is the "missing render target" case: fatal to this
    /// operation, surfaced through the notifier, nothing written.
    pub async fn export(
        &self,
        surface: Surface,
        person_name: &str,
        out_dir: &Path,
        notifier: &dyn Notifier,
    ) -> Result<PathBuf, AppError> {
        let _running = self.running.lock().await;

        notifier.notify(&Notification::info(
            "Preparing your resume...",
            "This may take a moment.",
        ));

        if surface.is_empty() {
            let err = AppError::MissingRenderTarget("the preview rendered no content".to_string());
            tracing::error!("export aborted: {err}");
            notifier.notify(&Notification::error(
                "Error downloading resume",
                "Please try again later.",
            ));
            return Err(err);
        }

        let spec = self.spec.clone();
        let dest = out_dir.join(export_filename(person_name));
        let task_dest = dest.clone();
        let result = tokio::task::spawn_blocking(move || -> Result<(), AppError> {
            let markup = svg::surface_to_svg(&surface, &spec);
            let pixmap = raster::capture(&markup, spec.raster_scale)?;
            pdf::package(&pixmap, &spec, &task_dest)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))?;

        match result {
            Ok(()) => {
                tracing::info!(path = %dest.display(), "resume exported");
                notifier.notify(&Notification::success(
                    "Resume downloaded!",
                    "Your resume has been saved as a PDF.",
                ));
                Ok(dest)
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                notifier.notify(&Notification::error(
                    "Error downloading resume",
                    "Please try again later.",
                ));
                Err(err)
            }
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(PageSpec::letter())
    }
}
