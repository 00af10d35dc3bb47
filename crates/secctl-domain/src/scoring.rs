//! Control scoring: effectiveness, issues, confidence, recommendations, tier.
//!
//! Every function here is pure. "Now" is passed in so results are reproducible.

use crate::calendar::months_before;
use crate::fingerprint::fingerprint_for_control;
use crate::model::SecurityControl;
use crate::policy::ScoringPolicy;
use secctl_types::{ControlValidationResult, EffectivenessStatus, IssueKind};
use time::OffsetDateTime;

const BASE_CONFIDENCE: f64 = 0.5;
const EVIDENCE_BONUS: f64 = 0.2;
const NO_ISSUES_BONUS: f64 = 0.3;
const PER_ISSUE_PENALTY: f64 = 0.1;

/// Status-derived effectiveness. Risk reduction and evidence play no part.
pub fn effectiveness(control: &SecurityControl, policy: &ScoringPolicy) -> f64 {
    policy
        .effectiveness
        .for_status(control.status)
        .clamp(0.0, 1.0)
}

/// Issues in fixed order: evidence, recency, owner.
pub fn identify_issues(
    control: &SecurityControl,
    now: OffsetDateTime,
    policy: &ScoringPolicy,
) -> Vec<IssueKind> {
    let mut issues = Vec::new();

    if !control.has_evidence() {
        issues.push(IssueKind::MissingEvidence);
    }

    let cutoff = months_before(now, policy.max_verification_age_months);
    let stale = match control.last_verified {
        None => true,
        Some(at) => at < cutoff,
    };
    if stale {
        issues.push(IssueKind::StaleVerification);
    }

    if !control.has_owner() {
        issues.push(IssueKind::MissingOwner);
    }

    issues
}

pub fn confidence(control: &SecurityControl, issues: &[IssueKind]) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if control.has_evidence() {
        confidence += EVIDENCE_BONUS;
    }

    if issues.is_empty() {
        confidence += NO_ISSUES_BONUS;
    } else {
        confidence -= issues.len() as f64 * PER_ISSUE_PENALTY;
    }

    confidence.clamp(0.0, 1.0)
}

pub fn recommendations(issues: &[IssueKind]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| issue.recommendation().to_string())
        .collect()
}

/// Tier from issue count and effectiveness only.
pub fn classify(issue_count: usize, effectiveness: f64, policy: &ScoringPolicy) -> EffectivenessStatus {
    if issue_count == 0 && effectiveness >= policy.effective_threshold {
        EffectivenessStatus::Effective
    } else if effectiveness >= policy.partial_threshold {
        EffectivenessStatus::PartiallyEffective
    } else {
        EffectivenessStatus::Ineffective
    }
}

/// Score one control into a result carrying sequence number `seq`.
pub fn score_control(
    control: &SecurityControl,
    seq: u64,
    now: OffsetDateTime,
    policy: &ScoringPolicy,
) -> ControlValidationResult {
    let effectiveness = effectiveness(control, policy);
    let issues = identify_issues(control, now, policy);
    let confidence = confidence(control, &issues);
    let recommendations = recommendations(&issues);
    let status = classify(issues.len(), effectiveness, policy);
    let fingerprint = fingerprint_for_control(&control.id, status, &issues);

    ControlValidationResult {
        seq,
        control_id: control.id.clone(),
        control_name: control.name.clone(),
        status,
        effectiveness,
        confidence,
        issues,
        recommendations,
        evidence: control.evidence.clone(),
        validated_at: now,
        fingerprint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{approx_eq, control, NOW};
    use secctl_types::ControlStatus;

    #[test]
    fn effectiveness_is_a_pure_status_lookup() {
        let policy = ScoringPolicy::default();
        let cases = [
            (ControlStatus::Implemented, 0.9),
            (ControlStatus::PartiallyImplemented, 0.6),
            (ControlStatus::NotImplemented, 0.0),
            (ControlStatus::Deprecated, 0.7),
        ];
        for (status, expected) in cases {
            let mut c = control("c", status);
            c.risk_reduction = 0.01;
            c.evidence.clear();
            assert!(approx_eq(effectiveness(&c, &policy), expected), "{status}");
        }
    }

    #[test]
    fn issues_come_out_in_fixed_order() {
        let policy = ScoringPolicy::default();
        let mut c = control("c", ControlStatus::Implemented);
        c.evidence.clear();
        c.last_verified = None;
        c.owner.clear();

        assert_eq!(
            identify_issues(&c, NOW, &policy),
            vec![
                IssueKind::MissingEvidence,
                IssueKind::StaleVerification,
                IssueKind::MissingOwner,
            ]
        );
    }

    #[test]
    fn verification_exactly_at_the_cutoff_is_not_stale() {
        let policy = ScoringPolicy::default();
        let mut c = control("c", ControlStatus::Implemented);
        c.last_verified = Some(months_before(NOW, 6));
        assert!(identify_issues(&c, NOW, &policy).is_empty());

        c.last_verified = Some(months_before(NOW, 6) - time::Duration::seconds(1));
        assert_eq!(
            identify_issues(&c, NOW, &policy),
            vec![IssueKind::StaleVerification]
        );
    }

    #[test]
    fn month_end_cutoff_rolls_past_short_months() {
        let policy = ScoringPolicy::default();
        let now = time::macros::datetime!(2026-08-31 09:00 UTC);
        let mut c = control("c", ControlStatus::Implemented);

        c.last_verified = Some(time::macros::datetime!(2026-03-01 09:00 UTC));
        assert_eq!(
            identify_issues(&c, now, &policy),
            vec![IssueKind::StaleVerification]
        );

        c.last_verified = Some(time::macros::datetime!(2026-03-03 09:00 UTC));
        assert!(identify_issues(&c, now, &policy).is_empty());
    }

    #[test]
    fn shorter_review_window_flags_older_verifications() {
        let policy = ScoringPolicy {
            max_verification_age_months: 3,
            ..ScoringPolicy::default()
        };
        let mut c = control("c", ControlStatus::Implemented);
        c.last_verified = Some(months_before(NOW, 4));
        assert_eq!(
            identify_issues(&c, NOW, &policy),
            vec![IssueKind::StaleVerification]
        );
    }

    #[test]
    fn confidence_rewards_evidence_and_clean_controls() {
        let c = control("c", ControlStatus::Implemented);
        assert!(approx_eq(confidence(&c, &[]), 1.0));
        assert!(approx_eq(
            confidence(&c, &[IssueKind::MissingOwner]),
            0.6
        ));
    }

    #[test]
    fn confidence_is_clamped_at_zero() {
        let mut c = control("c", ControlStatus::Implemented);
        c.evidence.clear();
        let many = [IssueKind::MissingEvidence; 6];
        assert_eq!(confidence(&c, &many), 0.0);
    }

    #[test]
    fn recommendations_follow_issue_order() {
        let recs = recommendations(&[IssueKind::MissingOwner, IssueKind::MissingEvidence]);
        assert_eq!(
            recs,
            vec![
                "Assign control owner".to_string(),
                "Provide evidence of control implementation".to_string(),
            ]
        );
    }

    #[test]
    fn classify_tiers() {
        let policy = ScoringPolicy::default();
        assert_eq!(classify(0, 0.9, &policy), EffectivenessStatus::Effective);
        assert_eq!(classify(1, 0.9, &policy), EffectivenessStatus::PartiallyEffective);
        assert_eq!(classify(0, 0.7, &policy), EffectivenessStatus::PartiallyEffective);
        assert_eq!(classify(0, 0.6, &policy), EffectivenessStatus::Ineffective);
        assert_eq!(classify(0, 0.0, &policy), EffectivenessStatus::Ineffective);
    }

    #[test]
    fn implemented_clean_control_is_effective() {
        let policy = ScoringPolicy::default();
        let c = control("ctrl-x", ControlStatus::Implemented);
        let result = score_control(&c, 7, NOW, &policy);

        assert_eq!(result.seq, 7);
        assert_eq!(result.control_id, "ctrl-x");
        assert_eq!(result.status, EffectivenessStatus::Effective);
        assert!(approx_eq(result.effectiveness, 0.9));
        assert!(approx_eq(result.confidence, 1.0));
        assert!(result.issues.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.evidence, c.evidence);
        assert_eq!(result.validated_at, NOW);
    }

    #[test]
    fn not_implemented_is_ineffective_whatever_else_holds() {
        let policy = ScoringPolicy::default();
        let c = control("ctrl-x", ControlStatus::NotImplemented);
        let result = score_control(&c, 1, NOW, &policy);
        assert_eq!(result.effectiveness, 0.0);
        assert_eq!(result.status, EffectivenessStatus::Ineffective);
    }

    #[test]
    fn deprecated_with_missing_owner_is_partially_effective() {
        let policy = ScoringPolicy::default();
        let mut c = control("ctrl-x", ControlStatus::Deprecated);
        c.owner.clear();
        let result = score_control(&c, 1, NOW, &policy);
        assert_eq!(result.status, EffectivenessStatus::PartiallyEffective);
        assert_eq!(result.issues, vec![IssueKind::MissingOwner]);
        assert_eq!(result.recommendations, vec!["Assign control owner".to_string()]);
        assert!(approx_eq(result.confidence, 0.6));
    }
}
