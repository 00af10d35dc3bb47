//! Render use cases: turn run outputs into the text each command prints.

use secctl_types::SecctlReport;

use crate::report::{
    renderable_control, renderable_control_result, renderable_test_case, renderable_test_result,
    to_renderable,
};
use crate::run::{RunOutput, SingleTestOutput};
use secctl_domain::model::SecurityControl;
use secctl_render::{RenderableControl, RenderableControlResult, RenderableTestResult};

fn controls(output: &RunOutput) -> Vec<RenderableControl> {
    output.controls.iter().map(renderable_control).collect()
}

fn control_results(report: &SecctlReport) -> Vec<RenderableControlResult> {
    let window = report.data.verification_window_months;
    report
        .controls
        .iter()
        .map(|r| renderable_control_result(r, window))
        .collect()
}

fn test_results(report: &SecctlReport) -> Vec<RenderableTestResult> {
    report.tests.iter().map(renderable_test_result).collect()
}

pub fn render_markdown(report: &SecctlReport) -> String {
    secctl_render::render_markdown(&to_renderable(report))
}

pub fn render_validate_text(output: &RunOutput) -> String {
    secctl_render::render_validation_run(&controls(output), &control_results(&output.report))
}

pub fn render_status_text(output: &RunOutput) -> String {
    secctl_render::render_status(&controls(output), &control_results(&output.report))
}

pub fn render_report_text(output: &RunOutput) -> String {
    secctl_render::render_report_run(
        &control_results(&output.report),
        &test_results(&output.report),
    )
}

pub fn render_tests_text(output: &RunOutput) -> String {
    secctl_render::render_test_report(&test_results(&output.report))
}

pub fn render_single_test_text(output: &SingleTestOutput) -> String {
    secctl_render::render_single_test(
        &renderable_test_case(&output.test),
        &renderable_test_result(&output.result),
    )
}

pub fn render_controls_text(controls: &[SecurityControl]) -> String {
    let controls: Vec<_> = controls.iter().map(renderable_control).collect();
    secctl_render::render_control_listing(&controls)
}
