use crate::{ControlValidationResult, ValidationResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for secctl reports.
pub const SCHEMA_REPORT_V1: &str = "secctl.report.v1";

/// Window assumed for reports written without one.
pub const DEFAULT_VERIFICATION_WINDOW_MONTHS: u32 = 6;

/// Overall verdict across scored controls and executed tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Fail => "fail",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub effective: u32,
    pub partially_effective: u32,
    pub ineffective: u32,
    pub tests_passed: u32,
    pub tests_failed: u32,
}

/// Secctl-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecctlData {
    pub profile: String,

    /// Verification window, in calendar months, the controls were scored against.
    #[serde(default = "default_verification_window_months")]
    pub verification_window_months: u32,

    pub controls_total: u32,
    pub controls_validated: u32,

    pub tests_total: u32,
    pub tests_executed: u32,

    /// Percentage of executed tests that passed; absent when none ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
}

fn default_verification_window_months() -> u32 {
    DEFAULT_VERIFICATION_WINDOW_MONTHS
}

/// The JSON envelope written by `--format json` and `--report-out`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = SecctlData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub verdict: Verdict,
    pub counts: VerdictCounts,
    #[serde(default)]
    pub controls: Vec<ControlValidationResult>,
    #[serde(default)]
    pub tests: Vec<ValidationResult>,
    pub data: TData,
}

pub type SecctlReport = ReportEnvelope<SecctlData>;
