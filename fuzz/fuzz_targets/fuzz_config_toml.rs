//! Fuzz target for secctl config parsing and resolution.
//!
//! Goal: parsing and resolving a config should **never panic** on any input.
//! Invalid TOML, unknown profiles and out-of-range thresholds must surface as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use secctl_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(cfg) = parse_config_toml(text) else {
        return;
    };

    if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
        let policy = resolved.policy;
        assert!(policy.partial_threshold <= policy.effective_threshold);
        assert!((0.0..=1.0).contains(&policy.effective_threshold));
    }
});
