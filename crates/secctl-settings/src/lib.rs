//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{EffectivenessConfig, SecctlConfigV1};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `secctl.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SecctlConfigV1> {
    let cfg: SecctlConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the scoring policy used by the engine (profile + config file + overrides).
pub fn resolve_config(cfg: SecctlConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
