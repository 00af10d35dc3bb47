//! Control tests: pluggable pass/fail checks and the test registry.

use crate::model::ControlTest;
use crate::policy::ScoringPolicy;
use secctl_types::{test_result_id, TestResultLabel, ValidationMethod, ValidationResult};
use time::OffsetDateTime;

const FAILED_TEST_RECOMMENDATION: &str = "Review and fix control implementation";

/// Decides whether a control test passes.
pub trait TestCheck {
    fn passed(&self, test: &ControlTest) -> bool;
}

/// Uses the outcome recorded on the test itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordedOutcome;

impl TestCheck for RecordedOutcome {
    fn passed(&self, test: &ControlTest) -> bool {
        test.passed
    }
}

/// Every test passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysPass;

impl TestCheck for AlwaysPass {
    fn passed(&self, _test: &ControlTest) -> bool {
        true
    }
}

impl<F> TestCheck for F
where
    F: Fn(&ControlTest) -> bool,
{
    fn passed(&self, test: &ControlTest) -> bool {
        self(test)
    }
}

/// Ordered control tests plus the results of the most recent run.
#[derive(Clone, Debug, Default)]
pub struct TestRegistry<C = RecordedOutcome> {
    tests: Vec<ControlTest>,
    results: Vec<ValidationResult>,
    policy: ScoringPolicy,
    check: C,
    last_seq: u64,
}

impl TestRegistry<RecordedOutcome> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self::with_check(RecordedOutcome, policy)
    }
}

impl<C: TestCheck> TestRegistry<C> {
    pub fn with_check(check: C, policy: ScoringPolicy) -> Self {
        Self {
            tests: Vec::new(),
            results: Vec::new(),
            policy,
            check,
            last_seq: 0,
        }
    }

    pub fn add_control_test(&mut self, test: ControlTest) {
        self.tests.push(test);
    }

    pub fn control_tests(&self) -> &[ControlTest] {
        &self.tests
    }

    pub fn control_test(&self, id: &str) -> Option<&ControlTest> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn tests_by_method(&self, method: ValidationMethod) -> Vec<&ControlTest> {
        self.tests.iter().filter(|t| t.method == method).collect()
    }

    pub fn validate(&mut self) -> Vec<ValidationResult> {
        self.validate_at(OffsetDateTime::now_utc())
    }

    /// Run every held test in insertion order. The run replaces the stored
    /// results; sequence numbers keep increasing across runs.
    pub fn validate_at(&mut self, now: OffsetDateTime) -> Vec<ValidationResult> {
        let mut results = Vec::with_capacity(self.tests.len());
        for test in &self.tests {
            self.last_seq += 1;
            let passed = self.check.passed(test);
            results.push(build_result(test, passed, self.last_seq, now, &self.policy));
        }
        self.results = results.clone();
        results
    }

    /// Run a single test without touching the stored results.
    pub fn validate_test_at(&mut self, test: &ControlTest, now: OffsetDateTime) -> ValidationResult {
        self.last_seq += 1;
        let passed = self.check.passed(test);
        build_result(test, passed, self.last_seq, now, &self.policy)
    }

    /// Results of the most recent `validate` run.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }
}

fn build_result(
    test: &ControlTest,
    passed: bool,
    seq: u64,
    now: OffsetDateTime,
    policy: &ScoringPolicy,
) -> ValidationResult {
    let (result, effectiveness, recommendations) = if passed {
        (
            TestResultLabel::Pass,
            policy.test_pass_effectiveness,
            Vec::new(),
        )
    } else {
        (
            TestResultLabel::Fail,
            policy.test_fail_effectiveness,
            vec![FAILED_TEST_RECOMMENDATION.to_string()],
        )
    };
    let effectiveness = effectiveness.clamp(0.0, 1.0);

    ValidationResult {
        seq,
        id: test_result_id(seq),
        control_id: test.id.clone(),
        control_name: test.name.clone(),
        passed,
        result,
        effectiveness,
        risk_remaining: 1.0 - effectiveness,
        recommendations,
        validated_at: now,
    }
}

/// Pass/fail counts over a set of test results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl TestSummary {
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    /// Percentage of passed tests, `None` when nothing ran.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.passed as f64 / self.total as f64 * 100.0)
    }
}
