use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `secctl.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecctlConfigV1 {
    /// Optional schema string for tooling (`secctl.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `standard` (default), `strict`, or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Controls verified longer ago than this many calendar months are stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_verification_age_months: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_pass_effectiveness: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_fail_effectiveness: Option<f64>,

    /// When to exit non-zero: `never`, `ineffective`, or `partial`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Glob patterns selecting control/test ids to evaluate.
    #[serde(default)]
    pub include: Vec<String>,

    /// Per-status effectiveness overrides.
    #[serde(default)]
    pub effectiveness: EffectivenessConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EffectivenessConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implemented: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partially_implemented: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_implemented: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}
