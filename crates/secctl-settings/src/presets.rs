use secctl_domain::policy::{FailOn, ScoringPolicy};

/// Known preset names.
pub const PROFILES: &[&str] = &["standard", "strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> ScoringPolicy {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => standard_profile(),
    }
}

fn standard_profile() -> ScoringPolicy {
    ScoringPolicy::default()
}

fn strict_profile() -> ScoringPolicy {
    ScoringPolicy {
        profile: "strict".to_string(),
        max_verification_age_months: 3,
        fail_on: FailOn::Partial,
        ..ScoringPolicy::default()
    }
}

fn lenient_profile() -> ScoringPolicy {
    ScoringPolicy {
        profile: "lenient".to_string(),
        max_verification_age_months: 12,
        ..ScoringPolicy::default()
    }
}
