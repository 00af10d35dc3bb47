//! Pure control scoring and control-test evaluation (no IO).
//!
//! Input: control and test records plus a scoring policy.
//! Output: validation results, accumulated in per-registry result logs.

#![forbid(unsafe_code)]

pub mod calendar;
pub mod catalog;
pub mod filter;
pub mod model;
pub mod policy;
pub mod registry;
pub mod scoring;
pub mod testing;
pub mod verdict;

mod fingerprint;

pub use registry::ControlRegistry;
pub use testing::{AlwaysPass, RecordedOutcome, TestCheck, TestRegistry, TestSummary};
pub use verdict::{breaches, compute_verdict};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
