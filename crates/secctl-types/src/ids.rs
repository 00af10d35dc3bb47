//! Stable identifiers for issue codes and result labels.
//!
//! Codes are short snake_case discriminators. Labels are the upper-case strings
//! printed in reports and stored in JSON.

// Issue codes
pub const CODE_MISSING_EVIDENCE: &str = "missing_evidence";
pub const CODE_STALE_VERIFICATION: &str = "stale_verification";
pub const CODE_MISSING_OWNER: &str = "missing_owner";

// Control status labels
pub const STATUS_EFFECTIVE: &str = "EFFECTIVE";
pub const STATUS_PARTIALLY_EFFECTIVE: &str = "PARTIALLY_EFFECTIVE";
pub const STATUS_INEFFECTIVE: &str = "INEFFECTIVE";

// Test result labels
pub const RESULT_PASS: &str = "PASS";
pub const RESULT_FAIL: &str = "FAIL";

// Prefix for test result ids (`val-000001`).
pub const TEST_RESULT_ID_PREFIX: &str = "val-";
