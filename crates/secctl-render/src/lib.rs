//! Rendering utilities for terminal and CI surfaces (plain text, Markdown).
//!
//! Renderers work on the small `Renderable*` model so they stay independent of the wire DTOs.

#![forbid(unsafe_code)]

mod listing;
mod markdown;
mod model;
mod text;

pub use listing::{
    render_control_listing, render_report_run, render_single_test, render_status,
    render_validation_run,
};
pub use markdown::render_markdown;
pub use model::{
    RenderableControl, RenderableControlResult, RenderableReport, RenderableTestCase,
    RenderableTestResult, RenderableVerdictStatus,
};
pub use text::{render_control_report, render_test_report};

pub(crate) fn pct(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}
