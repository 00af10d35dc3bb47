use secctl_types::ControlStatus;

/// When a run should be reported as failing (exit code 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Never,
    Ineffective,
    Partial,
}

/// Status to effectiveness lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusEffectiveness {
    pub implemented: f64,
    pub partially_implemented: f64,
    pub not_implemented: f64,
    /// Any status without its own entry (currently `deprecated`).
    pub other: f64,
}

impl StatusEffectiveness {
    pub fn for_status(&self, status: ControlStatus) -> f64 {
        match status {
            ControlStatus::Implemented => self.implemented,
            ControlStatus::PartiallyImplemented => self.partially_implemented,
            ControlStatus::NotImplemented => self.not_implemented,
            ControlStatus::Deprecated => self.other,
        }
    }
}

impl Default for StatusEffectiveness {
    fn default() -> Self {
        Self {
            implemented: 0.9,
            partially_implemented: 0.6,
            not_implemented: 0.0,
            other: 0.7,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoringPolicy {
    pub profile: String,
    /// A control verified before `now - N months` (or never) is stale.
    pub max_verification_age_months: u32,
    /// Minimum effectiveness for EFFECTIVE (also requires zero issues).
    pub effective_threshold: f64,
    /// Minimum effectiveness for PARTIALLY_EFFECTIVE.
    pub partial_threshold: f64,
    pub effectiveness: StatusEffectiveness,
    pub test_pass_effectiveness: f64,
    pub test_fail_effectiveness: f64,
    pub fail_on: FailOn,
    /// Glob patterns over control/test ids; empty means everything.
    pub include: Vec<String>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            max_verification_age_months: 6,
            effective_threshold: 0.9,
            partial_threshold: 0.7,
            effectiveness: StatusEffectiveness::default(),
            test_pass_effectiveness: 0.8,
            test_fail_effectiveness: 0.0,
            fail_on: FailOn::Never,
            include: Vec::new(),
        }
    }
}
