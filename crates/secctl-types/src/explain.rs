//! Explain registry for issue codes and status labels.
//!
//! Maps identifiers to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for an issue code or status label.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code/label.
    pub title: &'static str,
    /// What triggers it and why it matters.
    pub description: &'static str,
    /// How to resolve it.
    pub remediation: &'static str,
}

/// Look up an explanation by issue code or status label.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Issue codes
        ids::CODE_MISSING_EVIDENCE => Some(explain_missing_evidence()),
        ids::CODE_STALE_VERIFICATION => Some(explain_stale_verification()),
        ids::CODE_MISSING_OWNER => Some(explain_missing_owner()),

        // Status labels
        ids::STATUS_EFFECTIVE => Some(explain_effective()),
        ids::STATUS_PARTIALLY_EFFECTIVE => Some(explain_partially_effective()),
        ids::STATUS_INEFFECTIVE => Some(explain_ineffective()),

        _ => None,
    }
}

/// List all known issue codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_EVIDENCE,
        ids::CODE_STALE_VERIFICATION,
        ids::CODE_MISSING_OWNER,
    ]
}

/// List all known status labels.
pub fn all_statuses() -> &'static [&'static str] {
    &[
        ids::STATUS_EFFECTIVE,
        ids::STATUS_PARTIALLY_EFFECTIVE,
        ids::STATUS_INEFFECTIVE,
    ]
}

// --- Issue explanations ---

fn explain_missing_evidence() -> Explanation {
    Explanation {
        title: "Missing Evidence",
        description: "\
The control lists no evidence references.

Without evidence an auditor cannot confirm the control exists as described:
- confidence in the score drops by the missing evidence bonus
- the control cannot be rated EFFECTIVE while this issue is open",
        remediation: "\
Attach at least one evidence reference to the control, for example a policy
document, an exported configuration, or an audit log extract.",
    }
}

fn explain_stale_verification() -> Explanation {
    Explanation {
        title: "Stale Verification",
        description: "\
The control has never been verified, or its last verification is older than
the configured review window (6 calendar months in the standard profile).

Controls drift over time: a configuration verified a year ago says little
about today.",
        remediation: "\
Schedule a verification of the control and record the date it was performed.
Shorter windows can be enforced with the `strict` profile or
`max_verification_age_months` in secctl.toml.",
    }
}

fn explain_missing_owner() -> Explanation {
    Explanation {
        title: "Missing Owner",
        description: "\
No team or person is accountable for the control.

Unowned controls are the first to be skipped during reviews and incident
handling.",
        remediation: "\
Assign an owner (team or role) responsible for operating and verifying the
control.",
    }
}

// --- Status explanations ---

fn explain_effective() -> Explanation {
    Explanation {
        title: "Effective",
        description: "\
The control has no open issues and its status-derived effectiveness meets the
effective threshold (0.9 in the standard profile).",
        remediation: "\
Nothing to do. Keep evidence current and re-verify before the review window
lapses.",
    }
}

fn explain_partially_effective() -> Explanation {
    Explanation {
        title: "Partially Effective",
        description: "\
Either the control has open issues, or its effectiveness is between the
partial threshold (0.7) and the effective threshold (0.9).",
        remediation: "\
Resolve the listed issues. If the control is only partially implemented,
complete the implementation and update its status.",
    }
}

fn explain_ineffective() -> Explanation {
    Explanation {
        title: "Ineffective",
        description: "\
The control's effectiveness is below the partial threshold (0.7). Controls
that are not implemented always land here.",
        remediation: "\
Implement the control, or replace it with a compensating control and record
the decision.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_and_status_has_an_explanation() {
        for id in all_codes().iter().chain(all_statuses()) {
            let exp = lookup_explanation(id).unwrap_or_else(|| panic!("missing {id}"));
            assert!(!exp.title.is_empty());
            assert!(!exp.remediation.is_empty());
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("not_a_code").is_none());
    }
}
