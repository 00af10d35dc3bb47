use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A problem found while scoring a control.
///
/// Each kind carries its own message and recommendation, so there is no
/// free-text issue that could miss a recommendation mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The control lists no evidence references.
    MissingEvidence,
    /// Never verified, or last verified before the allowed window.
    StaleVerification,
    /// Owner string is empty.
    MissingOwner,
}

impl IssueKind {
    /// Emission order used by the scorer.
    pub const ALL: [IssueKind; 3] = [
        IssueKind::MissingEvidence,
        IssueKind::StaleVerification,
        IssueKind::MissingOwner,
    ];

    pub fn code(self) -> &'static str {
        match self {
            IssueKind::MissingEvidence => ids::CODE_MISSING_EVIDENCE,
            IssueKind::StaleVerification => ids::CODE_STALE_VERIFICATION,
            IssueKind::MissingOwner => ids::CODE_MISSING_OWNER,
        }
    }

    /// Report text for this issue; `window_months` is the verification window
    /// the control was scored against.
    pub fn message(self, window_months: u32) -> String {
        match self {
            IssueKind::MissingEvidence => {
                "No evidence provided for control implementation".to_string()
            }
            IssueKind::StaleVerification => {
                format!("Control not verified in last {window_months} months")
            }
            IssueKind::MissingOwner => "Control owner not assigned".to_string(),
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            IssueKind::MissingEvidence => "Provide evidence of control implementation",
            IssueKind::StaleVerification => "Schedule control verification",
            IssueKind::MissingOwner => "Assign control owner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
