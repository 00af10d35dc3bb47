//! The `explain` use case: look up issue code and status label documentation.

use secctl_types::explain::{self, Explanation};
use secctl_types::IssueKind;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available codes and status labels.
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
        available_statuses: &'static [&'static str],
    },
}

/// Look up an explanation for an issue code or status label.
///
/// Status labels are matched case-insensitively and accept hyphens, so
/// `partially-effective` finds `PARTIALLY_EFFECTIVE`.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let normalized = identifier.trim().replace('-', "_");
    let found = explain::lookup_explanation(&normalized)
        .or_else(|| explain::lookup_explanation(&normalized.to_ascii_uppercase()))
        .or_else(|| {
            IssueKind::from_code(&normalized.to_ascii_lowercase())
                .and_then(|kind| explain::lookup_explanation(kind.code()))
        });

    match found {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_codes: explain::all_codes(),
            available_statuses: explain::all_statuses(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, codes: &[&'static str], statuses: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown issue code or status: {}\n\n", identifier));
    out.push_str("Available issue codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }
    out.push_str("\nAvailable statuses:\n");
    for status in statuses {
        out.push_str(&format!("  - {}\n", status));
    }

    out
}
