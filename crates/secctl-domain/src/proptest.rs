//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Effectiveness/confidence clamping
//! - Status label purity (issue count + effectiveness only)
//! - Risk remaining as the complement of effectiveness
//! - Result log growth and sequence ordering

use crate::calendar::months_before;
use crate::model::{ControlTest, SecurityControl};
use crate::policy::{ScoringPolicy, StatusEffectiveness};
use crate::registry::ControlRegistry;
use crate::scoring::{classify, score_control};
use crate::test_support::NOW;
use crate::testing::TestRegistry;
use proptest::prelude::*;
use secctl_types::{
    ControlCategory, ControlStatus, ControlType, EffectivenessStatus, IssueKind, ValidationMethod,
};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_status() -> impl Strategy<Value = ControlStatus> {
    prop_oneof![
        Just(ControlStatus::Implemented),
        Just(ControlStatus::PartiallyImplemented),
        Just(ControlStatus::NotImplemented),
        Just(ControlStatus::Deprecated),
    ]
}

fn arb_category() -> impl Strategy<Value = ControlCategory> {
    prop::sample::select(ControlCategory::ALL.to_vec())
}

fn arb_method() -> impl Strategy<Value = ValidationMethod> {
    prop::sample::select(ValidationMethod::ALL.to_vec())
}

/// Verification age in months; `None` means never verified.
fn arb_verified_months_ago() -> impl Strategy<Value = Option<u32>> {
    prop::option::of(0u32..36)
}

fn arb_control() -> impl Strategy<Value = SecurityControl> {
    (
        "ctrl-[0-9]{3}",
        arb_status(),
        arb_category(),
        prop::collection::vec("[a-z]{1,8}\\.pdf", 0..3),
        prop_oneof![Just(String::new()), "[A-Z][a-z]{2,10} Team"],
        arb_verified_months_ago(),
        0.0f64..1.0,
    )
        .prop_map(
            |(id, status, category, evidence, owner, months_ago, risk_reduction)| {
                SecurityControl {
                    id: id.clone(),
                    name: format!("Control {id}"),
                    description: String::new(),
                    category,
                    control_type: ControlType::Technical,
                    sub_category: String::new(),
                    risk_reduction,
                    implementation: String::new(),
                    verification: String::new(),
                    maintenance: String::new(),
                    owner,
                    status,
                    last_verified: months_ago.map(|m| months_before(NOW, m)),
                    next_review: None,
                    evidence,
                    references: Vec::new(),
                }
            },
        )
}

fn arb_control_test() -> impl Strategy<Value = ControlTest> {
    ("test-[0-9]{3}", arb_method(), any::<bool>()).prop_map(|(id, method, passed)| ControlTest {
        id: id.clone(),
        name: format!("Test {id}"),
        description: String::new(),
        method,
        steps: Vec::new(),
        expected_result: String::new(),
        actual_result: String::new(),
        passed,
        notes: String::new(),
        tested_by: String::new(),
        tested_at: None,
    })
}

/// Policies with arbitrary (possibly out-of-range) effectiveness constants.
fn arb_policy() -> impl Strategy<Value = ScoringPolicy> {
    (
        -1.0f64..2.0,
        -1.0f64..2.0,
        -1.0f64..2.0,
        -1.0f64..2.0,
        -1.0f64..2.0,
        1u32..24,
    )
        .prop_map(|(implemented, partial, not_impl, other, pass, months)| ScoringPolicy {
            max_verification_age_months: months,
            effectiveness: StatusEffectiveness {
                implemented,
                partially_implemented: partial,
                not_implemented: not_impl,
                other,
            },
            test_pass_effectiveness: pass,
            ..ScoringPolicy::default()
        })
}

// ============================================================================
// Scoring invariants
// ============================================================================

proptest! {
    /// Effectiveness and confidence always land in [0, 1].
    #[test]
    fn scores_are_clamped(control in arb_control(), policy in arb_policy()) {
        let result = score_control(&control, 1, NOW, &policy);
        prop_assert!((0.0..=1.0).contains(&result.effectiveness));
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    /// The label depends only on (issue count, effectiveness).
    #[test]
    fn status_label_is_pure(control in arb_control()) {
        let policy = ScoringPolicy::default();
        let result = score_control(&control, 1, NOW, &policy);
        prop_assert_eq!(
            result.status,
            classify(result.issues.len(), result.effectiveness, &policy)
        );
    }

    /// One recommendation per issue, in the same order.
    #[test]
    fn recommendations_mirror_issues(control in arb_control()) {
        let result = score_control(&control, 1, NOW, &ScoringPolicy::default());
        prop_assert_eq!(result.issues.len(), result.recommendations.len());
        for (issue, rec) in result.issues.iter().zip(&result.recommendations) {
            prop_assert_eq!(issue.recommendation(), rec.as_str());
        }
    }

    /// Issues are a subsequence of the fixed emission order.
    #[test]
    fn issues_follow_emission_order(control in arb_control()) {
        let result = score_control(&control, 1, NOW, &ScoringPolicy::default());
        let positions: Vec<usize> = result
            .issues
            .iter()
            .map(|i| IssueKind::ALL.iter().position(|k| k == i).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Not-implemented controls are always ineffective under the standard policy.
    #[test]
    fn not_implemented_is_always_ineffective(mut control in arb_control()) {
        control.status = ControlStatus::NotImplemented;
        let result = score_control(&control, 1, NOW, &ScoringPolicy::default());
        prop_assert_eq!(result.effectiveness, 0.0);
        prop_assert_eq!(result.status, EffectivenessStatus::Ineffective);
    }
}

// ============================================================================
// Registry invariants
// ============================================================================

proptest! {
    /// Every known-id validation appends exactly one entry with the next seq.
    #[test]
    fn result_log_grows_by_one_per_hit(
        controls in prop::collection::vec(arb_control(), 1..6),
        lookups in prop::collection::vec("ctrl-[0-9]{3}", 0..12),
    ) {
        let mut registry = ControlRegistry::new();
        for c in controls {
            registry.add_control(c);
        }

        let mut expected = 0usize;
        for id in &lookups {
            let known = registry.control(id).is_some();
            let result = registry.validate_control_at(id, NOW);
            prop_assert_eq!(result.is_some(), known);
            if known {
                expected += 1;
            }
        }

        prop_assert_eq!(registry.results().len(), expected);
        let seqs: Vec<u64> = registry.results().iter().map(|r| r.seq).collect();
        prop_assert!(seqs.windows(2).all(|w| w[0] < w[1]));
    }

    /// risk_remaining + effectiveness == 1 for every test result.
    #[test]
    fn risk_remaining_complements_effectiveness(
        tests in prop::collection::vec(arb_control_test(), 0..8),
        policy in arb_policy(),
    ) {
        let mut registry = TestRegistry::with_policy(policy);
        for t in tests.iter().cloned() {
            registry.add_control_test(t);
        }

        let results = registry.validate_at(NOW);
        prop_assert_eq!(results.len(), tests.len());
        for (test, result) in tests.iter().zip(&results) {
            prop_assert_eq!(&result.control_id, &test.id);
            prop_assert_eq!(result.passed, test.passed);
            prop_assert!((result.effectiveness + result.risk_remaining - 1.0).abs() < 1e-12);
            prop_assert!((0.0..=1.0).contains(&result.effectiveness));
        }
    }
}
