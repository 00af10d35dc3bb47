//! Fuzz target for control id include filters.
//!
//! Goal: building and matching an include filter should **never panic**.
//! Invalid glob patterns may be rejected.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_id_filter
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use secctl_domain::filter::IdFilter;

#[derive(Arbitrary, Debug)]
struct FilterInput {
    /// Include patterns (e.g., "ctrl-00*", "test-*")
    patterns: Vec<String>,
    /// Control or test ids to match
    ids: Vec<String>,
}

fuzz_target!(|input: FilterInput| {
    if input.patterns.len() > 20 || input.ids.len() > 100 {
        return;
    }

    let patterns: Vec<String> = input
        .patterns
        .into_iter()
        .filter(|p| p.len() <= 256)
        .collect();

    let Ok(filter) = IdFilter::new(&patterns) else {
        return;
    };

    for id in input.ids.iter().filter(|id| id.len() <= 512) {
        let hit = filter.matches(id);
        if patterns.is_empty() {
            assert!(hit, "empty include list must match everything");
        }
    }
});
