//! SVG → raster capture via usvg/resvg.
//!
//! The one place the crate touches real fonts: usvg resolves the generic
//! `sans-serif`/`serif` families against the system font database and
//! converts text to paths before resvg rasterizes. Missing fonts degrade to
//! dropped text rather than an error, matching the collaborator-boundary
//! contract — capture fails only on malformed input or an unrasterizable
//! page size.

use tiny_skia::Pixmap;

use crate::errors::AppError;

/// Parses the SVG and rasterizes it at `scale` (the fixed export upscale
/// factor; 2.0 in the default pipeline).
pub fn capture(svg: &str, scale: f32) -> Result<Pixmap, AppError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| AppError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        AppError::Raster(format!("cannot allocate {width}x{height} pixmap"))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}
