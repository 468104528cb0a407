use thiserror::Error;

/// Application-level error type.
///
/// Limit violations (section caps, duplicate skills, last-bullet removal) are
/// deliberately NOT represented here — the editors treat them as silent
/// no-ops. `AppError` covers the export pipeline and registry lookups, the
/// only operations that can actually fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Nothing to export: {0}")]
    MissingRenderTarget(String),

    #[error("SVG assembly error: {0}")]
    Svg(String),

    #[error("Rasterization error: {0}")]
    Raster(String),

    #[error("PDF packaging error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_prefixed() {
        let e = AppError::UnknownTemplate("neon".to_string());
        assert_eq!(e.to_string(), "Unknown template: neon");

        let e = AppError::MissingRenderTarget("empty surface".to_string());
        assert!(e.to_string().starts_with("Nothing to export"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: AppError = io.into();
        assert!(matches!(e, AppError::Io(_)));
    }
}
