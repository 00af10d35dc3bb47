use crate::{ids, IssueKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Effectiveness tier assigned to a scored control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectivenessStatus {
    Effective,
    PartiallyEffective,
    Ineffective,
}

impl EffectivenessStatus {
    pub const ALL: [EffectivenessStatus; 3] = [
        EffectivenessStatus::Effective,
        EffectivenessStatus::PartiallyEffective,
        EffectivenessStatus::Ineffective,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EffectivenessStatus::Effective => ids::STATUS_EFFECTIVE,
            EffectivenessStatus::PartiallyEffective => ids::STATUS_PARTIALLY_EFFECTIVE,
            EffectivenessStatus::Ineffective => ids::STATUS_INEFFECTIVE,
        }
    }
}

impl fmt::Display for EffectivenessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResultLabel {
    Pass,
    Fail,
}

impl TestResultLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            TestResultLabel::Pass => ids::RESULT_PASS,
            TestResultLabel::Fail => ids::RESULT_FAIL,
        }
    }
}

impl fmt::Display for TestResultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ControlValidationResult {
    /// Position in the registry's result log (1-based, strictly increasing).
    pub seq: u64,
    pub control_id: String,
    pub control_name: String,
    pub status: EffectivenessStatus,
    pub effectiveness: f64,
    pub confidence: f64,
    /// Issues in emission order (evidence, recency, owner).
    #[serde(default)]
    pub issues: Vec<IssueKind>,
    /// One entry per issue, same order.
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Evidence references copied from the control.
    #[serde(default)]
    pub evidence: Vec<String>,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub validated_at: OffsetDateTime,
    /// SHA-256 over control id, status and issue codes. Identical outcomes
    /// share a fingerprint across runs.
    pub fingerprint: String,
}

/// Outcome of executing one control test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub seq: u64,
    /// `val-NNNNNN`, derived from `seq`.
    pub id: String,
    pub control_id: String,
    pub control_name: String,
    pub passed: bool,
    pub result: TestResultLabel,
    pub effectiveness: f64,
    /// Always `1.0 - effectiveness`.
    pub risk_remaining: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub validated_at: OffsetDateTime,
}

/// Format the stable id of a test result.
pub fn test_result_id(seq: u64) -> String {
    format!("{}{:06}", ids::TEST_RESULT_ID_PREFIX, seq)
}
