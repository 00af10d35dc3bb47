use secctl_types::{EffectivenessStatus, IssueKind};
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a control validation outcome.
///
/// Identity fields:
/// - control id
/// - status label
/// - issue codes, in emission order
pub fn fingerprint_for_control(
    control_id: &str,
    status: EffectivenessStatus,
    issues: &[IssueKind],
) -> String {
    let mut parts = vec![control_id, status.as_str()];
    parts.extend(issues.iter().map(|i| i.code()));
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
