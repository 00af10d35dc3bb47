//! Use case orchestration for secctl.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to the appropriate
//! layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod render;
mod report;
mod run;

pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{
    render_controls_text, render_markdown, render_report_text, render_single_test_text,
    render_status_text, render_tests_text, render_validate_text,
};
pub use report::{build_report, parse_report_json, serialize_report, to_renderable};
pub use run::{
    list_controls, resolve_policy, run_report, run_single_test, run_test_suite, run_validate,
    verdict_exit_code, CheckMode, ControlQuery, RunInput, RunOutput, SingleTestOutput,
};
