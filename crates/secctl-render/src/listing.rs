//! Command-level text views built around the two reports.

use crate::{
    pct, render_control_report, render_test_report, RenderableControl, RenderableControlResult,
    RenderableTestCase, RenderableTestResult,
};

fn banner(out: &mut String, title: &str, underline: usize) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(underline));
    out.push_str("\n\n");
}

/// Controls to validate, one line per scored control, then the control report.
pub fn render_validation_run(
    controls: &[RenderableControl],
    results: &[RenderableControlResult],
) -> String {
    let mut out = String::new();
    banner(&mut out, "Security Control Validation", 26);

    out.push_str("Controls to Validate:\n");
    for (i, c) in controls.iter().enumerate() {
        out.push_str(&format!("  [{}] {} ({})\n", i + 1, c.name, c.category));
    }
    out.push('\n');

    out.push_str("Running Validation...\n\n");
    for r in results {
        out.push_str(&format!("[{}] {}\n", r.status, r.name));
        out.push_str(&format!("    Effectiveness: {}\n", pct(r.effectiveness)));
        out.push_str(&format!("    Confidence: {}\n", pct(r.confidence)));
        if !r.issues.is_empty() {
            out.push_str(&format!("    Issues: {}\n", r.issues.len()));
        }
        out.push('\n');
    }

    out.push_str(&render_control_report(results));
    out
}

/// Controls grouped by category in first-seen order.
pub fn render_control_listing(controls: &[RenderableControl]) -> String {
    let mut out = String::new();
    banner(&mut out, "Available Security Controls", 27);
    out.push_str("Controls by Category:\n\n");

    let mut categories: Vec<&str> = Vec::new();
    for c in controls {
        if !categories.contains(&c.category.as_str()) {
            categories.push(c.category.as_str());
        }
    }

    for category in categories {
        out.push_str(&format!("{category} Controls:\n"));
        let members = controls.iter().filter(|c| c.category == category);
        for (i, c) in members.enumerate() {
            out.push_str(&format!("  [{}] {} ({})\n", i + 1, c.name, c.status));
            out.push_str(&format!("      Risk Reduction: {}\n", pct(c.risk_reduction)));
            out.push_str(&format!("      Owner: {}\n\n", c.owner));
        }
    }

    out.push_str(&format!("Total Controls: {}\n", controls.len()));
    out
}

/// Declared-status counts followed by one line per scored control.
pub fn render_status(
    controls: &[RenderableControl],
    results: &[RenderableControlResult],
) -> String {
    let mut out = String::new();
    banner(&mut out, "Security Control Status", 23);
    out.push_str("Control Status Summary:\n\n");

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for c in controls {
        match counts.iter_mut().find(|(s, _)| *s == c.status) {
            Some((_, n)) => *n += 1,
            None => counts.push((c.status.as_str(), 1)),
        }
    }
    for (status, n) in counts {
        out.push_str(&format!("{status}: {n}\n"));
    }
    out.push('\n');

    out.push_str("Controls by Effectiveness:\n\n");
    for r in results {
        out.push_str(&format!(
            "[{}] {} effective - {}\n",
            r.status,
            pct(r.effectiveness),
            r.name
        ));
    }
    out
}

/// Control report followed by the test report.
pub fn render_report_run(
    controls: &[RenderableControlResult],
    tests: &[RenderableTestResult],
) -> String {
    let mut out = String::new();
    banner(&mut out, "Generate Validation Report", 25);
    out.push_str("=== Control Validation Report ===\n");
    out.push_str(&render_control_report(controls));
    out.push_str("\n\n=== Test Validation Report ===\n");
    out.push_str(&render_test_report(tests));
    out
}

pub fn render_single_test(test: &RenderableTestCase, result: &RenderableTestResult) -> String {
    let mut out = format!("Testing Control: {}\n\n", test.id);
    out.push_str(&format!("Test: {}\n", test.name));
    out.push_str(&format!("Description: {}\n", test.description));
    out.push_str(&format!("Method: {}\n\n", test.method));

    out.push_str(&format!("Result: {}\n", result.result));
    out.push_str(&format!("Effectiveness: {}\n", pct(result.effectiveness)));
    out.push_str(&format!("Risk Remaining: {}\n", pct(result.risk_remaining)));

    if !result.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for rec in &result.recommendations {
            out.push_str(&format!("  - {rec}\n"));
        }
    }
    out
}
