use crate::{model::SecctlConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use secctl_domain::policy::{FailOn, ScoringPolicy};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_age_months: Option<u32>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: ScoringPolicy,
}

pub fn resolve_config(cfg: SecctlConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    if !presets::PROFILES.contains(&profile.as_str()) {
        anyhow::bail!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        );
    }

    let mut policy = presets::preset(&profile);

    if let Some(months) = overrides.max_age_months.or(cfg.max_verification_age_months) {
        policy.max_verification_age_months = months;
    }

    if let Some(v) = cfg.effective_threshold {
        policy.effective_threshold = unit("effective_threshold", v)?;
    }
    if let Some(v) = cfg.partial_threshold {
        policy.partial_threshold = unit("partial_threshold", v)?;
    }
    if policy.partial_threshold > policy.effective_threshold {
        anyhow::bail!(
            "partial_threshold ({}) must not exceed effective_threshold ({})",
            policy.partial_threshold,
            policy.effective_threshold
        );
    }

    if let Some(v) = cfg.test_pass_effectiveness {
        policy.test_pass_effectiveness = unit("test_pass_effectiveness", v)?;
    }
    if let Some(v) = cfg.test_fail_effectiveness {
        policy.test_fail_effectiveness = unit("test_fail_effectiveness", v)?;
    }

    // per-status effectiveness
    let eff = &cfg.effectiveness;
    if let Some(v) = eff.implemented {
        policy.effectiveness.implemented = unit("effectiveness.implemented", v)?;
    }
    if let Some(v) = eff.partially_implemented {
        policy.effectiveness.partially_implemented =
            unit("effectiveness.partially_implemented", v)?;
    }
    if let Some(v) = eff.not_implemented {
        policy.effectiveness.not_implemented = unit("effectiveness.not_implemented", v)?;
    }
    if let Some(v) = eff.other {
        policy.effectiveness.other = unit("effectiveness.other", v)?;
    }

    if !cfg.include.is_empty() {
        validate_include(&cfg.include)?;
        policy.include = cfg.include.clone();
    }

    // CLI wins over config file
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        policy.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { policy })
}

fn unit(field: &str, v: f64) -> anyhow::Result<f64> {
    if !(0.0..=1.0).contains(&v) {
        anyhow::bail!("{field} must be within [0, 1], got {v}");
    }
    Ok(v)
}

fn validate_include(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid include glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "ineffective" => Ok(FailOn::Ineffective),
        "partial" | "partially_effective" => Ok(FailOn::Partial),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|ineffective|partial)"),
    }
}
