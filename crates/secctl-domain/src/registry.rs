use crate::model::SecurityControl;
use crate::policy::ScoringPolicy;
use crate::scoring::score_control;
use secctl_types::{ControlCategory, ControlStatus, ControlValidationResult};
use time::OffsetDateTime;

/// Ordered control collection plus an append-only log of validation results.
///
/// Duplicate ids are allowed; lookups return the first match.
#[derive(Clone, Debug, Default)]
pub struct ControlRegistry {
    controls: Vec<SecurityControl>,
    results: Vec<ControlValidationResult>,
    policy: ScoringPolicy,
    last_seq: u64,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn add_control(&mut self, control: SecurityControl) {
        self.controls.push(control);
    }

    pub fn controls(&self) -> &[SecurityControl] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&SecurityControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn controls_by_category(&self, category: ControlCategory) -> Vec<&SecurityControl> {
        self.controls
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    pub fn controls_by_status(&self, status: ControlStatus) -> Vec<&SecurityControl> {
        self.controls.iter().filter(|c| c.status == status).collect()
    }

    /// Score the first control with `id` against the current wall clock.
    pub fn validate_control(&mut self, id: &str) -> Option<ControlValidationResult> {
        self.validate_control_at(id, OffsetDateTime::now_utc())
    }

    /// Score the first control with `id` as of `now` and append the result to
    /// the log. Unknown ids leave the log untouched.
    pub fn validate_control_at(
        &mut self,
        id: &str,
        now: OffsetDateTime,
    ) -> Option<ControlValidationResult> {
        let index = self.controls.iter().position(|c| c.id == id)?;
        let seq = self.last_seq + 1;
        let result = score_control(&self.controls[index], seq, now, &self.policy);

        self.last_seq = seq;
        self.results.push(result.clone());
        Some(result)
    }

    /// Score every held control in insertion order.
    pub fn validate_all_at(&mut self, now: OffsetDateTime) -> Vec<ControlValidationResult> {
        let mut out = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            self.last_seq += 1;
            let result = score_control(control, self.last_seq, now, &self.policy);
            self.results.push(result.clone());
            out.push(result);
        }
        out
    }

    /// Every result produced so far, oldest first.
    pub fn results(&self) -> &[ControlValidationResult] {
        &self.results
    }
}
