#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

/// A control as listed before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableControl {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub risk_reduction: f64,
    pub owner: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableControlResult {
    pub id: String,
    pub name: String,
    /// Effectiveness label, e.g. `EFFECTIVE`.
    pub status: String,
    pub effectiveness: f64,
    pub confidence: f64,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableTestCase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub method: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableTestResult {
    pub name: String,
    pub control_id: String,
    pub passed: bool,
    /// `PASS` or `FAIL`.
    pub result: String,
    pub effectiveness: f64,
    pub risk_remaining: f64,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub profile: String,
    pub controls: Vec<RenderableControlResult>,
    pub tests: Vec<RenderableTestResult>,
}
