//! Raster → paginated PDF packaging via printpdf.
//!
//! The captured pixmap is fitted to the width of a US-letter page inside the
//! margins, preserving aspect ratio. Content taller than one page is sliced
//! into full-width strips, one per page. The document is written to a
//! sibling temp file and renamed into place, so a failed save never leaves a
//! partial PDF behind.

use std::fs;
use std::io::{BufWriter, Cursor};
use std::path::Path;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use tiny_skia::{IntSize, Pixmap};

use crate::errors::AppError;
use crate::export::PageSpec;

const LETTER_WIDTH_MM: f32 = 215.9;
const LETTER_HEIGHT_MM: f32 = 279.4;
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Declared image resolution; only the ratio to the page scale matters.
const IMAGE_DPI: f32 = 300.0;

/// Splits `height_px` rows into strips of at most `strip_px` rows.
/// Returns `(start_row, row_count)` pairs covering the full height.
pub fn page_slices(height_px: u32, strip_px: u32) -> Vec<(u32, u32)> {
    let strip = strip_px.max(1);
    let mut slices = Vec::new();
    let mut start = 0;
    while start < height_px {
        let rows = strip.min(height_px - start);
        slices.push((start, rows));
        start += rows;
    }
    slices
}

/// Packages the pixmap into a letter-sized PDF at `dest`.
pub fn package(pixmap: &Pixmap, spec: &PageSpec, dest: &Path) -> Result<(), AppError> {
    let margin_mm = spec.pdf_margin_pt * PT_TO_MM;
    let avail_w_mm = LETTER_WIDTH_MM - 2.0 * margin_mm;
    let avail_h_mm = LETTER_HEIGHT_MM - 2.0 * margin_mm;

    let width_px = pixmap.width();
    let height_px = pixmap.height();
    if width_px == 0 || height_px == 0 {
        return Err(AppError::Pdf("captured image is empty".to_string()));
    }

    // Fit to page width; the vertical strip size follows from the same scale.
    let mm_per_px = avail_w_mm / width_px as f32;
    let strip_px = (avail_h_mm / mm_per_px).floor() as u32;
    let slices = page_slices(height_px, strip_px);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Resume",
        Mm(LETTER_WIDTH_MM),
        Mm(LETTER_HEIGHT_MM),
        "Layer 1",
    );

    let stride = width_px as usize * 4;
    let natural_w_mm = width_px as f32 * 25.4 / IMAGE_DPI;
    let scale = avail_w_mm / natural_w_mm;

    for (i, (start, rows)) in slices.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(LETTER_WIDTH_MM), Mm(LETTER_HEIGHT_MM), "Layer 1")
        };

        let begin = *start as usize * stride;
        let end = (*start + *rows) as usize * stride;
        let strip_data = pixmap.data()[begin..end].to_vec();
        let size = IntSize::from_wh(width_px, *rows)
            .ok_or_else(|| AppError::Pdf(format!("invalid strip size {width_px}x{rows}")))?;
        let strip = Pixmap::from_vec(strip_data, size)
            .ok_or_else(|| AppError::Pdf("strip buffer mismatch".to_string()))?;
        let png = strip
            .encode_png()
            .map_err(|e| AppError::Pdf(format!("png encoding failed: {e}")))?;

        let decoder = PngDecoder::new(Cursor::new(&png[..]))
            .map_err(|e| AppError::Pdf(format!("png decode failed: {e}")))?;
        let image = Image::try_from(decoder)
            .map_err(|e| AppError::Pdf(format!("image embed failed: {e}")))?;

        let strip_h_mm = *rows as f32 * mm_per_px;
        image.add_to_layer(
            doc.get_page(page).get_layer(layer),
            ImageTransform {
                translate_x: Some(Mm(margin_mm)),
                translate_y: Some(Mm(LETTER_HEIGHT_MM - margin_mm - strip_h_mm)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
    }

    // Write atomically: temp file first, rename on success only.
    let tmp = dest.with_extension("pdf.partial");
    let file = fs::File::create(&tmp)?;
    if let Err(e) = doc.save(&mut BufWriter::new(file)) {
        let _ = fs::remove_file(&tmp);
        return Err(AppError::Pdf(e.to_string()));
    }
    fs::rename(&tmp, dest)?;
    Ok(())
}
