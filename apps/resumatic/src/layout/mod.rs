// Text measurement for the preview layout: static width tables + greedy
// word-wrap. CPU-bound consumers (the export capture) run via
// tokio::task::spawn_blocking.

pub mod metrics;

pub use metrics::{get_metrics, wrap_lines, FontClass, FontMetricTable};
