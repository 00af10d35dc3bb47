use crate::calendar::months_before;
use crate::model::{ControlTest, SecurityControl};
use secctl_types::{ControlCategory, ControlStatus, ControlType, ValidationMethod};
use time::macros::datetime;
use time::OffsetDateTime;

pub const NOW: OffsetDateTime = datetime!(2026-10-18 09:00 UTC);

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A control with evidence, an owner, and a verification one month old.
pub fn control(id: &str, status: ControlStatus) -> SecurityControl {
    SecurityControl {
        id: id.to_string(),
        name: format!("Control {id}"),
        description: "test control".to_string(),
        category: ControlCategory::Preventive,
        control_type: ControlType::Technical,
        sub_category: "Testing".to_string(),
        risk_reduction: 0.3,
        implementation: String::new(),
        verification: String::new(),
        maintenance: String::new(),
        owner: "Security Team".to_string(),
        status,
        last_verified: Some(months_before(NOW, 1)),
        next_review: None,
        evidence: vec!["evidence.pdf".to_string()],
        references: Vec::new(),
    }
}

pub fn control_test(id: &str, method: ValidationMethod, passed: bool) -> ControlTest {
    ControlTest {
        id: id.to_string(),
        name: format!("Test {id}"),
        description: "test".to_string(),
        method,
        steps: vec!["step one".to_string(), "step two".to_string()],
        expected_result: "works".to_string(),
        actual_result: String::new(),
        passed,
        notes: String::new(),
        tested_by: "QA".to_string(),
        tested_at: Some(NOW),
    }
}
