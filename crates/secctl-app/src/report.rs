use anyhow::Context;
use secctl_domain::model::{ControlTest, SecurityControl};
use secctl_domain::policy::ScoringPolicy;
use secctl_domain::{compute_verdict, TestSummary};
use secctl_render::{
    RenderableControl, RenderableControlResult, RenderableReport, RenderableTestCase,
    RenderableTestResult, RenderableVerdictStatus,
};
use secctl_types::{
    ControlValidationResult, RunMeta, SecctlData, SecctlReport, ToolMeta, ValidationResult,
    Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Assemble the report envelope for one run. `ended_at` is taken now.
pub fn build_report(
    policy: &ScoringPolicy,
    started_at: OffsetDateTime,
    controls_total: usize,
    controls: Vec<ControlValidationResult>,
    tests_total: usize,
    tests: Vec<ValidationResult>,
) -> SecctlReport {
    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    let (verdict, counts) = compute_verdict(&controls, &tests);
    let summary = TestSummary::from_results(&tests);

    SecctlReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "secctl".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at: Some(ended_at),
            duration_ms: Some(duration_ms),
        },
        verdict,
        counts,
        data: SecctlData {
            profile: policy.profile.clone(),
            verification_window_months: policy.max_verification_age_months,
            controls_total: controls_total as u32,
            controls_validated: controls.len() as u32,
            tests_total: tests_total as u32,
            tests_executed: tests.len() as u32,
            success_rate: summary.success_rate(),
        },
        controls,
        tests,
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<SecctlReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse secctl v1 report")
}

pub fn serialize_report(report: &SecctlReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &SecctlReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        profile: report.data.profile.clone(),
        controls: report
            .controls
            .iter()
            .map(|r| renderable_control_result(r, report.data.verification_window_months))
            .collect(),
        tests: report.tests.iter().map(renderable_test_result).collect(),
    }
}

pub(crate) fn renderable_control_result(
    r: &ControlValidationResult,
    window_months: u32,
) -> RenderableControlResult {
    RenderableControlResult {
        id: r.control_id.clone(),
        name: r.control_name.clone(),
        status: r.status.as_str().to_string(),
        effectiveness: r.effectiveness,
        confidence: r.confidence,
        issues: r.issues.iter().map(|i| i.message(window_months)).collect(),
        recommendations: r.recommendations.clone(),
    }
}

pub(crate) fn renderable_test_result(r: &ValidationResult) -> RenderableTestResult {
    RenderableTestResult {
        name: r.control_name.clone(),
        control_id: r.control_id.clone(),
        passed: r.passed,
        result: r.result.as_str().to_string(),
        effectiveness: r.effectiveness,
        risk_remaining: r.risk_remaining,
        recommendations: r.recommendations.clone(),
    }
}

pub(crate) fn renderable_control(c: &SecurityControl) -> RenderableControl {
    RenderableControl {
        id: c.id.clone(),
        name: c.name.clone(),
        category: c.category.as_str().to_string(),
        status: c.status.as_str().to_string(),
        risk_reduction: c.risk_reduction,
        owner: c.owner.clone(),
    }
}

pub(crate) fn renderable_test_case(t: &ControlTest) -> RenderableTestCase {
    RenderableTestCase {
        id: t.id.clone(),
        name: t.name.clone(),
        description: t.description.clone(),
        method: t.method.as_str().to_string(),
    }
}
