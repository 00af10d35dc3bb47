use crate::policy::FailOn;
use secctl_types::{
    ControlValidationResult, EffectivenessStatus, ValidationResult, Verdict, VerdictCounts,
};

/// Fold control and test results into a verdict.
///
/// Any INEFFECTIVE control or failed test fails the run; any PARTIALLY_EFFECTIVE
/// control warns; otherwise the run passes.
pub fn compute_verdict(
    controls: &[ControlValidationResult],
    tests: &[ValidationResult],
) -> (Verdict, VerdictCounts) {
    let mut counts = VerdictCounts::default();
    for c in controls {
        match c.status {
            EffectivenessStatus::Effective => counts.effective += 1,
            EffectivenessStatus::PartiallyEffective => counts.partially_effective += 1,
            EffectivenessStatus::Ineffective => counts.ineffective += 1,
        }
    }
    for t in tests {
        if t.passed {
            counts.tests_passed += 1;
        } else {
            counts.tests_failed += 1;
        }
    }

    let verdict = if counts.ineffective > 0 || counts.tests_failed > 0 {
        Verdict::Fail
    } else if counts.partially_effective > 0 {
        Verdict::Warn
    } else {
        Verdict::Pass
    };

    (verdict, counts)
}

/// Whether `verdict` should turn into a failing exit code under `fail_on`.
pub fn breaches(verdict: Verdict, fail_on: FailOn) -> bool {
    match fail_on {
        FailOn::Never => false,
        FailOn::Ineffective => verdict == Verdict::Fail,
        FailOn::Partial => verdict >= Verdict::Warn,
    }
}
