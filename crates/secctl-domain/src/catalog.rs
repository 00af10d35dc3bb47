//! Built-in control and control-test catalog.
//!
//! Factories return owned collections; callers are free to mutate them.

use crate::calendar::months_before;
use crate::model::{ControlFramework, ControlTest, SecurityControl};
use secctl_types::{ControlCategory, ControlStatus, ControlType, ValidationMethod};
use time::OffsetDateTime;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four baseline controls, verified one to four months before `now`.
pub fn common_controls(now: OffsetDateTime) -> Vec<SecurityControl> {
    vec![
        SecurityControl {
            id: "ctrl-001".to_string(),
            name: "Access Control Policy".to_string(),
            description: "Policy governing access to systems and data".to_string(),
            category: ControlCategory::Preventive,
            control_type: ControlType::Administrative,
            sub_category: "Access Management".to_string(),
            risk_reduction: 0.3,
            implementation: "Documented access control policy enforced through IAM".to_string(),
            verification: "Review policy documents and access logs".to_string(),
            maintenance: String::new(),
            owner: "Security Team".to_string(),
            status: ControlStatus::Implemented,
            last_verified: Some(months_before(now, 3)),
            next_review: None,
            evidence: strings(&["policy-access-control.pdf", "iam-configuration.json"]),
            references: strings(&["NIST-800-53-AC-1"]),
        },
        SecurityControl {
            id: "ctrl-002".to_string(),
            name: "Multi-Factor Authentication".to_string(),
            description: "MFA for all user access to systems".to_string(),
            category: ControlCategory::Preventive,
            control_type: ControlType::Technical,
            sub_category: "Authentication".to_string(),
            risk_reduction: 0.4,
            implementation: "MFA enforced for all user accounts".to_string(),
            verification: "Test MFA enforcement".to_string(),
            maintenance: String::new(),
            owner: "IT Operations".to_string(),
            status: ControlStatus::Implemented,
            last_verified: Some(months_before(now, 1)),
            next_review: None,
            evidence: strings(&["mfa-configuration.json", "audit-log.json"]),
            references: strings(&["NIST-800-53-IA-2"]),
        },
        SecurityControl {
            id: "ctrl-003".to_string(),
            name: "Security Monitoring".to_string(),
            description: "Continuous security monitoring of systems".to_string(),
            category: ControlCategory::Detective,
            control_type: ControlType::Technical,
            sub_category: "Monitoring".to_string(),
            risk_reduction: 0.35,
            implementation: "SIEM and IDS/IPS deployed".to_string(),
            verification: "Review monitoring dashboards".to_string(),
            maintenance: String::new(),
            owner: "SOC Team".to_string(),
            status: ControlStatus::Implemented,
            last_verified: Some(months_before(now, 2)),
            next_review: None,
            evidence: strings(&["siem-config.json", "monitoring-report.pdf"]),
            references: strings(&["NIST-800-53-AU-6"]),
        },
        SecurityControl {
            id: "ctrl-004".to_string(),
            name: "Incident Response Plan".to_string(),
            description: "Documented incident response procedures".to_string(),
            category: ControlCategory::Corrective,
            control_type: ControlType::Administrative,
            sub_category: "Incident Response".to_string(),
            risk_reduction: 0.25,
            implementation: "IR plan documented and tested".to_string(),
            verification: "Review IR plan and test results".to_string(),
            maintenance: String::new(),
            owner: "Security Team".to_string(),
            status: ControlStatus::Implemented,
            last_verified: Some(months_before(now, 4)),
            next_review: None,
            evidence: strings(&["ir-plan.pdf", "test-results.pdf"]),
            references: strings(&["NIST-800-53-IR-1"]),
        },
    ]
}

/// The baseline controls wrapped as a framework.
pub fn common_framework(now: OffsetDateTime) -> ControlFramework {
    ControlFramework {
        name: "Secctl Baseline".to_string(),
        version: "1.0.0".to_string(),
        description: "Baseline access, authentication, monitoring and incident response controls"
            .to_string(),
        controls: common_controls(now),
        last_updated: now,
    }
}

/// The four baseline control tests, all recorded as passed at `now`.
pub fn common_control_tests(now: OffsetDateTime) -> Vec<ControlTest> {
    vec![
        ControlTest {
            id: "test-001".to_string(),
            name: "Access Control Verification".to_string(),
            description: "Verify access control policies are enforced".to_string(),
            method: ValidationMethod::Testing,
            steps: strings(&[
                "Attempt unauthorized access",
                "Verify access is denied",
                "Review access logs",
            ]),
            expected_result: "Unauthorized access denied".to_string(),
            actual_result: String::new(),
            passed: true,
            notes: "All access controls functioning correctly".to_string(),
            tested_by: "Security Team".to_string(),
            tested_at: Some(now),
        },
        ControlTest {
            id: "test-002".to_string(),
            name: "Encryption Verification".to_string(),
            description: "Verify data encryption at rest and in transit".to_string(),
            method: ValidationMethod::Testing,
            steps: strings(&[
                "Check encryption configuration",
                "Verify certificates",
                "Test data encryption",
            ]),
            expected_result: "Data encrypted correctly".to_string(),
            actual_result: String::new(),
            passed: true,
            notes: "Encryption properly configured".to_string(),
            tested_by: "Security Team".to_string(),
            tested_at: Some(now),
        },
        ControlTest {
            id: "test-003".to_string(),
            name: "Monitoring Verification".to_string(),
            description: "Verify security monitoring is active".to_string(),
            method: ValidationMethod::Observation,
            steps: strings(&[
                "Check monitoring dashboards",
                "Verify alert configuration",
                "Test alert generation",
            ]),
            expected_result: "Monitoring active and alerts working".to_string(),
            actual_result: String::new(),
            passed: true,
            notes: "All monitoring systems operational".to_string(),
            tested_by: "SOC Team".to_string(),
            tested_at: Some(now),
        },
        ControlTest {
            id: "test-004".to_string(),
            name: "Backup Verification".to_string(),
            description: "Verify backup and recovery procedures".to_string(),
            method: ValidationMethod::Testing,
            steps: strings(&[
                "Check backup status",
                "Test data restoration",
                "Verify recovery time",
            ]),
            expected_result: "Backups successful and recoverable".to_string(),
            actual_result: String::new(),
            passed: true,
            notes: "Backup and recovery working correctly".to_string(),
            tested_by: "IT Operations".to_string(),
            tested_at: Some(now),
        },
    ]
}
