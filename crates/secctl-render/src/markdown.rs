use crate::{pct, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Secctl report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let passed = report.tests.iter().filter(|t| t.passed).count();
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: {}\n- Controls: {} validated\n- Tests: {} passed / {} failed\n\n",
        verdict,
        report.profile,
        report.controls.len(),
        passed,
        report.tests.len() - passed
    ));

    out.push_str("## Controls\n\n");
    if report.controls.is_empty() {
        out.push_str("No controls validated.\n\n");
    } else {
        out.push_str("| Control | ID | Status | Effectiveness | Confidence |\n");
        out.push_str("|---|---|---|---|---|\n");
        for c in &report.controls {
            out.push_str(&format!(
                "| {} | `{}` | {} | {} | {} |\n",
                c.name,
                c.id,
                c.status,
                pct(c.effectiveness),
                pct(c.confidence)
            ));
        }
        out.push('\n');

        let flagged: Vec<_> = report.controls.iter().filter(|c| !c.issues.is_empty()).collect();
        if !flagged.is_empty() {
            out.push_str("### Issues\n\n");
            for c in flagged {
                for (issue, rec) in c.issues.iter().zip(&c.recommendations) {
                    out.push_str(&format!("- `{}`: {}\n  - fix: {}\n", c.id, issue, rec));
                }
            }
            out.push('\n');
        }
    }

    out.push_str("## Tests\n\n");
    if report.tests.is_empty() {
        out.push_str("No tests executed.\n");
        return out;
    }

    out.push_str("| Test | ID | Result | Effectiveness | Risk remaining |\n");
    out.push_str("|---|---|---|---|---|\n");
    for t in &report.tests {
        out.push_str(&format!(
            "| {} | `{}` | {} | {} | {} |\n",
            t.name,
            t.control_id,
            t.result,
            pct(t.effectiveness),
            pct(t.risk_remaining)
        ));
    }

    out
}
