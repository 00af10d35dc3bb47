//! Validation use cases: score controls, execute control tests, or both.

use anyhow::Context;
use secctl_domain::catalog::{common_control_tests, common_controls, common_framework};
use secctl_domain::filter::IdFilter;
use secctl_domain::model::{ControlTest, SecurityControl};
use secctl_domain::policy::{FailOn, ScoringPolicy};
use secctl_domain::{AlwaysPass, ControlRegistry, TestCheck, TestRegistry, breaches};
use secctl_settings::{Overrides, ResolvedConfig};
use secctl_types::{
    ControlCategory, ControlStatus, ControlValidationResult, SecctlReport, ValidationResult, Verdict,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::report::build_report;

/// How control-test outcomes are decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckMode {
    /// Use the outcome recorded on each test.
    #[default]
    Recorded,
    /// Treat every test as passing.
    AssumePass,
}

/// Input shared by every run use case.
#[derive(Clone, Debug, Default)]
pub struct RunInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub check: CheckMode,
}

/// Optional `controls` listing filters, in their textual form.
#[derive(Clone, Debug, Default)]
pub struct ControlQuery {
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RunOutput {
    pub report: SecctlReport,
    /// Controls selected for this run, in catalog order.
    pub controls: Vec<SecurityControl>,
    /// Control tests selected for this run, in catalog order.
    pub tests: Vec<ControlTest>,
    pub resolved_config: ResolvedConfig,
}

#[derive(Clone, Debug)]
pub struct SingleTestOutput {
    pub test: ControlTest,
    pub result: ValidationResult,
    pub report: SecctlReport,
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text (empty is allowed, defaults apply).
pub fn resolve_policy(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        secctl_settings::SecctlConfigV1::default()
    } else {
        secctl_settings::parse_config_toml(config_text).context("parse config")?
    };
    secctl_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Score every selected built-in control.
pub fn run_validate(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    execute(input, true, false)
}

/// Execute every selected built-in control test.
pub fn run_test_suite(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    execute(input, false, true)
}

/// Score controls, then execute control tests.
pub fn run_report(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    execute(input, true, true)
}

/// Execute one built-in control test by id. Unknown ids are an error.
pub fn run_single_test(input: RunInput<'_>, test_id: &str) -> anyhow::Result<SingleTestOutput> {
    let started_at = OffsetDateTime::now_utc();
    let resolved = resolve_policy(input.config_text, input.overrides.clone())?;
    let policy = &resolved.policy;

    let catalog = common_control_tests(started_at);
    let Some(test) = catalog.iter().find(|t| t.id == test_id).cloned() else {
        warn!(test_id, "unknown control test");
        let known: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        anyhow::bail!(
            "unknown control test: {test_id} (available: {})",
            known.join(", ")
        );
    };

    let result = run_tests(input.check, policy, std::slice::from_ref(&test), started_at)
        .pop()
        .context("control test produced no result")?;
    info!(test_id, result = result.result.as_str(), "control test executed");

    let report = build_report(
        policy,
        started_at,
        0,
        Vec::new(),
        1,
        vec![result.clone()],
    );

    Ok(SingleTestOutput {
        test,
        result,
        report,
        resolved_config: resolved,
    })
}

/// Built-in controls selected by the configured include globs and the
/// optional category/status filters, unscored.
pub fn list_controls(
    input: RunInput<'_>,
    query: &ControlQuery,
) -> anyhow::Result<Vec<SecurityControl>> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<ControlCategory>)
        .transpose()
        .context("invalid category filter")?;
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ControlStatus>)
        .transpose()
        .context("invalid status filter")?;

    let resolved = resolve_policy(input.config_text, input.overrides)?;
    let filter = include_filter(&resolved.policy)?;

    let mut registry = ControlRegistry::with_policy(resolved.policy);
    for control in common_controls(OffsetDateTime::now_utc()) {
        if filter.matches(&control.id) {
            registry.add_control(control);
        }
    }

    let selected: Vec<&SecurityControl> = match (category, status) {
        (Some(category), Some(status)) => registry
            .controls_by_category(category)
            .into_iter()
            .filter(|c| c.status == status)
            .collect(),
        (Some(category), None) => registry.controls_by_category(category),
        (None, Some(status)) => registry.controls_by_status(status),
        (None, None) => registry.controls().iter().collect(),
    };
    debug!(?category, ?status, selected = selected.len(), "listing controls");
    Ok(selected.into_iter().cloned().collect())
}

/// 0 unless the verdict crosses the `fail_on` threshold, then 2.
pub fn verdict_exit_code(verdict: Verdict, fail_on: FailOn) -> i32 {
    if breaches(verdict, fail_on) { 2 } else { 0 }
}

fn include_filter(policy: &ScoringPolicy) -> anyhow::Result<IdFilter> {
    IdFilter::new(&policy.include).context("build include filter")
}

fn execute(input: RunInput<'_>, with_controls: bool, with_tests: bool) -> anyhow::Result<RunOutput> {
    let started_at = OffsetDateTime::now_utc();
    let resolved = resolve_policy(input.config_text, input.overrides.clone())?;
    let policy = &resolved.policy;
    let filter = include_filter(policy)?;
    debug!(profile = %policy.profile, include = ?policy.include, "resolved scoring policy");

    let (controls, control_results) = if with_controls {
        let framework = common_framework(started_at);
        debug!(framework = %framework.name, version = %framework.version, "seeding controls");
        let controls: Vec<_> = framework
            .controls
            .into_iter()
            .filter(|c| filter.matches(&c.id))
            .collect();
        let results = score_controls(&controls, policy, started_at);
        (controls, results)
    } else {
        (Vec::new(), Vec::new())
    };

    let (tests, test_results) = if with_tests {
        let tests: Vec<_> = common_control_tests(started_at)
            .into_iter()
            .filter(|t| filter.matches(&t.id))
            .collect();
        let results = run_tests(input.check, policy, &tests, started_at);
        (tests, results)
    } else {
        (Vec::new(), Vec::new())
    };

    let report = build_report(
        policy,
        started_at,
        controls.len(),
        control_results,
        tests.len(),
        test_results,
    );
    info!(
        verdict = report.verdict.as_str(),
        controls = report.controls.len(),
        tests = report.tests.len(),
        "run complete"
    );

    Ok(RunOutput {
        report,
        controls,
        tests,
        resolved_config: resolved,
    })
}

fn score_controls(
    controls: &[SecurityControl],
    policy: &ScoringPolicy,
    now: OffsetDateTime,
) -> Vec<ControlValidationResult> {
    let mut registry = ControlRegistry::with_policy(policy.clone());
    for control in controls {
        registry.add_control(control.clone());
    }

    for control in controls {
        match registry.validate_control_at(&control.id, now) {
            Some(result) => debug!(
                control_id = %result.control_id,
                status = result.status.as_str(),
                issues = result.issues.len(),
                "control validated"
            ),
            None => warn!(control_id = %control.id, "control not found"),
        }
    }
    registry.results().to_vec()
}

/// Execute `tests` in order, deciding outcomes per `check`.
fn run_tests(
    check: CheckMode,
    policy: &ScoringPolicy,
    tests: &[ControlTest],
    now: OffsetDateTime,
) -> Vec<ValidationResult> {
    match check {
        CheckMode::Recorded => execute_tests(TestRegistry::with_policy(policy.clone()), tests, now),
        CheckMode::AssumePass => execute_tests(
            TestRegistry::with_check(AlwaysPass, policy.clone()),
            tests,
            now,
        ),
    }
}

fn execute_tests<C: TestCheck>(
    mut registry: TestRegistry<C>,
    tests: &[ControlTest],
    now: OffsetDateTime,
) -> Vec<ValidationResult> {
    for test in tests {
        registry.add_control_test(test.clone());
    }
    registry.validate_at(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secctl_types::{EffectivenessStatus, TestResultLabel};

    #[test]
    fn empty_config_uses_defaults() {
        let output = run_validate(RunInput::default()).expect("run_validate");
        assert_eq!(output.resolved_config.policy.profile, "standard");
        assert_eq!(output.report.controls.len(), 4);
        assert!(output.report.tests.is_empty());
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert!(output
            .report
            .controls
            .iter()
            .all(|r| r.status == EffectivenessStatus::Effective));
    }

    #[test]
    fn strict_profile_downgrades_older_verifications() {
        let input = RunInput {
            overrides: Overrides {
                profile: Some("strict".to_string()),
                ..Overrides::default()
            },
            ..RunInput::default()
        };
        let output = run_validate(input).expect("run_validate");

        // ctrl-004 was verified four months ago; the strict window is three.
        let stale: Vec<_> = output
            .report
            .controls
            .iter()
            .filter(|r| r.status == EffectivenessStatus::PartiallyEffective)
            .map(|r| r.control_id.as_str())
            .collect();
        assert_eq!(stale, ["ctrl-004"]);
        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(
            verdict_exit_code(output.report.verdict, output.resolved_config.policy.fail_on),
            2
        );
    }

    #[test]
    fn include_globs_select_controls_and_tests() {
        let config = "include = [\"ctrl-00[12]\", \"test-003\"]";
        let output = run_report(RunInput {
            config_text: config,
            ..RunInput::default()
        })
        .expect("run_report");

        let controls: Vec<_> = output.controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(controls, ["ctrl-001", "ctrl-002"]);
        let tests: Vec<_> = output.report.tests.iter().map(|t| t.control_id.as_str()).collect();
        assert_eq!(tests, ["test-003"]);
        assert_eq!(output.report.data.controls_total, 2);
        assert_eq!(output.report.data.tests_total, 1);
    }

    #[test]
    fn test_suite_reports_full_success() {
        let output = run_test_suite(RunInput::default()).expect("run_test_suite");
        assert!(output.report.controls.is_empty());
        assert_eq!(output.report.tests.len(), 4);
        assert_eq!(output.report.data.success_rate, Some(100.0));
        let ids: Vec<_> = output.report.tests.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["val-000001", "val-000002", "val-000003", "val-000004"]);
    }

    fn recorded_failure() -> ControlTest {
        let mut test = common_control_tests(OffsetDateTime::now_utc()).remove(0);
        test.passed = false;
        test
    }

    #[test]
    fn recorded_mode_keeps_a_failed_outcome() {
        let policy = ScoringPolicy::default();
        let results = run_tests(
            CheckMode::Recorded,
            &policy,
            &[recorded_failure()],
            OffsetDateTime::now_utc(),
        );
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].result, TestResultLabel::Fail);
        assert_eq!(results[0].risk_remaining, 1.0);
    }

    #[test]
    fn assume_pass_overrides_a_failed_outcome() {
        let policy = ScoringPolicy::default();
        let results = run_tests(
            CheckMode::AssumePass,
            &policy,
            &[recorded_failure()],
            OffsetDateTime::now_utc(),
        );
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert_eq!(results[0].result, TestResultLabel::Pass);
        assert!(results[0].recommendations.is_empty());
    }

    #[test]
    fn test_suite_with_assume_pass() {
        let output = run_test_suite(RunInput {
            check: CheckMode::AssumePass,
            ..RunInput::default()
        })
        .expect("run_test_suite");
        assert_eq!(output.report.tests.len(), 4);
        assert!(output.report.tests.iter().all(|t| t.passed));
        assert_eq!(output.report.verdict, Verdict::Pass);
    }

    #[test]
    fn single_test_runs_by_id() {
        let output = run_single_test(RunInput::default(), "test-002").expect("run_single_test");
        assert_eq!(output.test.name, "Encryption Verification");
        assert_eq!(output.result.result, TestResultLabel::Pass);
        assert_eq!(output.report.tests.len(), 1);
    }

    #[test]
    fn single_test_unknown_id_is_an_error() {
        let err = run_single_test(RunInput::default(), "test-999").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown control test: test-999"));
        assert!(msg.contains("test-001"));
    }

    #[test]
    fn invalid_config_is_reported_with_context() {
        let err = run_validate(RunInput {
            config_text: "profile = [",
            ..RunInput::default()
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn list_controls_applies_include() {
        let controls = list_controls(
            RunInput {
                config_text: "include = [\"ctrl-003\"]",
                ..RunInput::default()
            },
            &ControlQuery::default(),
        )
        .expect("list_controls");
        assert_eq!(controls.len(), 1);
        assert_eq!(controls[0].name, "Security Monitoring");
    }

    #[test]
    fn list_controls_filters_by_category_and_status() {
        let query = ControlQuery {
            category: Some("Preventive".to_string()),
            status: None,
        };
        let controls = list_controls(RunInput::default(), &query).expect("list_controls");
        let ids: Vec<_> = controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ctrl-001", "ctrl-002"]);

        let query = ControlQuery {
            category: Some("detective".to_string()),
            status: Some("implemented".to_string()),
        };
        let controls = list_controls(RunInput::default(), &query).expect("list_controls");
        let ids: Vec<_> = controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ctrl-003"]);

        let query = ControlQuery {
            category: None,
            status: Some("not-implemented".to_string()),
        };
        assert!(list_controls(RunInput::default(), &query)
            .expect("list_controls")
            .is_empty());
    }

    #[test]
    fn list_controls_rejects_unknown_category() {
        let query = ControlQuery {
            category: Some("offensive".to_string()),
            status: None,
        };
        let err = list_controls(RunInput::default(), &query).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid category filter"));
        assert!(msg.contains("unknown category: offensive"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Fail, FailOn::Never), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail, FailOn::Ineffective), 2);
        assert_eq!(verdict_exit_code(Verdict::Warn, FailOn::Ineffective), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn, FailOn::Partial), 2);
        assert_eq!(verdict_exit_code(Verdict::Pass, FailOn::Partial), 0);
    }
}
