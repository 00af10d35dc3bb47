use crate::{pct, RenderableControlResult, RenderableTestResult};

const REPORT_HEADER: &str = "=== Security Control Validation Report ===\n\n";

/// One block per logged control result, oldest first.
pub fn render_control_report(results: &[RenderableControlResult]) -> String {
    let mut out = String::from(REPORT_HEADER);

    if results.is_empty() {
        out.push_str("No controls validated yet\n");
        return out;
    }

    out.push_str("Validation Results:\n");
    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!("\n[{}] {}\n", i + 1, r.name));
        out.push_str(&format!("    ID: {}\n", r.id));
        out.push_str(&format!("    Status: {}\n", r.status));
        out.push_str(&format!("    Effectiveness: {}\n", pct(r.effectiveness)));
        out.push_str(&format!("    Confidence: {}\n\n", pct(r.confidence)));

        numbered_section(&mut out, "Issues", &r.issues);
        numbered_section(&mut out, "Recommendations", &r.recommendations);
    }

    out
}

fn numbered_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("    {title}:\n"));
    for (j, item) in items.iter().enumerate() {
        out.push_str(&format!("      [{}] {}\n", j + 1, item));
    }
    out.push('\n');
}

/// Summary plus per-result details for one test run.
pub fn render_test_report(results: &[RenderableTestResult]) -> String {
    let mut out = String::from(REPORT_HEADER);

    if results.is_empty() {
        out.push_str("No validation results available\n");
        return out;
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;
    let rate = passed as f64 / results.len() as f64;

    out.push_str("Validation Summary:\n");
    out.push_str(&format!("  Total Tests: {}\n", results.len()));
    out.push_str(&format!("  Passed: {passed}\n"));
    out.push_str(&format!("  Failed: {failed}\n"));
    out.push_str(&format!("  Success Rate: {}\n\n", pct(rate)));

    out.push_str("Validation Details:\n");
    for (i, r) in results.iter().enumerate() {
        let glyph = if r.passed { "✓" } else { "✗" };
        out.push_str(&format!("  [{}] {} {}\n", i + 1, glyph, r.name));
        out.push_str(&format!("      Control ID: {}\n", r.control_id));
        out.push_str(&format!("      Result: {}\n", r.result));
        out.push_str(&format!("      Effectiveness: {}\n", pct(r.effectiveness)));
        out.push_str(&format!("      Risk Remaining: {}\n", pct(r.risk_remaining)));

        if !r.recommendations.is_empty() {
            out.push_str("      Recommendations:\n");
            for rec in &r.recommendations {
                out.push_str(&format!("        - {rec}\n"));
            }
        }

        out.push('\n');
    }

    out
}
