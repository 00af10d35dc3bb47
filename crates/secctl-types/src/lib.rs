//! Stable DTOs and IDs used across the secctl workspace.
//!
//! This crate is intentionally boring:
//! - control taxonomy enums (category, type, status, validation method)
//! - issue kinds with their stable codes and recommendations
//! - validation result records and the emitted report envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issue;
pub mod receipt;
pub mod result;
pub mod taxonomy;

pub use explain::{lookup_explanation, Explanation};
pub use issue::IssueKind;
pub use receipt::{
    ReportEnvelope, RunMeta, SecctlData, SecctlReport, ToolMeta, Verdict, VerdictCounts,
    DEFAULT_VERIFICATION_WINDOW_MONTHS, SCHEMA_REPORT_V1,
};
pub use result::{
    test_result_id, ControlValidationResult, EffectivenessStatus, TestResultLabel, ValidationResult,
};
pub use taxonomy::{ControlCategory, ControlStatus, ControlType, ParseEnumError, ValidationMethod};
