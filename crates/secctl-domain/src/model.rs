use secctl_types::{ControlCategory, ControlStatus, ControlType, ValidationMethod};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct SecurityControl {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ControlCategory,
    pub control_type: ControlType,
    pub sub_category: String,
    /// Fraction of the targeted risk this control is expected to remove.
    pub risk_reduction: f64,
    pub implementation: String,
    pub verification: String,
    pub maintenance: String,
    pub owner: String,
    pub status: ControlStatus,
    pub last_verified: Option<OffsetDateTime>,
    pub next_review: Option<OffsetDateTime>,
    pub evidence: Vec<String>,
    pub references: Vec<String>,
}

impl SecurityControl {
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }

    pub fn has_owner(&self) -> bool {
        !self.owner.is_empty()
    }
}

/// A named set of controls, e.g. the built-in baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlFramework {
    pub name: String,
    pub version: String,
    pub description: String,
    pub controls: Vec<SecurityControl>,
    pub last_updated: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlTest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub method: ValidationMethod,
    /// Executed in order.
    pub steps: Vec<String>,
    pub expected_result: String,
    pub actual_result: String,
    /// Outcome recorded by whoever last ran the test.
    pub passed: bool,
    pub notes: String,
    pub tested_by: String,
    pub tested_at: Option<OffsetDateTime>,
}
