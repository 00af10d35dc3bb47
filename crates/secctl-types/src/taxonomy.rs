//! Control taxonomy: category, type, implementation status, validation method.
//!
//! Every enum round-trips through its snake_case string form, which is what
//! the `controls` listing filters and JSON reports use.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a known variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value} (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str, all: &[&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: all.join("|"),
        }
    }
}

/// Accept `partially-implemented` as well as `partially_implemented`.
fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlCategory {
    Preventive,
    Detective,
    Corrective,
    Deterrent,
    Recovery,
}

impl ControlCategory {
    pub const ALL: [ControlCategory; 5] = [
        ControlCategory::Preventive,
        ControlCategory::Detective,
        ControlCategory::Corrective,
        ControlCategory::Deterrent,
        ControlCategory::Recovery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlCategory::Preventive => "preventive",
            ControlCategory::Detective => "detective",
            ControlCategory::Corrective => "corrective",
            ControlCategory::Deterrent => "deterrent",
            ControlCategory::Recovery => "recovery",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    Technical,
    Administrative,
    Physical,
}

impl ControlType {
    pub const ALL: [ControlType; 3] = [
        ControlType::Technical,
        ControlType::Administrative,
        ControlType::Physical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlType::Technical => "technical",
            ControlType::Administrative => "administrative",
            ControlType::Physical => "physical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlStatus {
    Implemented,
    PartiallyImplemented,
    NotImplemented,
    Deprecated,
}

impl ControlStatus {
    pub const ALL: [ControlStatus; 4] = [
        ControlStatus::Implemented,
        ControlStatus::PartiallyImplemented,
        ControlStatus::NotImplemented,
        ControlStatus::Deprecated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlStatus::Implemented => "implemented",
            ControlStatus::PartiallyImplemented => "partially_implemented",
            ControlStatus::NotImplemented => "not_implemented",
            ControlStatus::Deprecated => "deprecated",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMethod {
    Documentation,
    Interview,
    Observation,
    Testing,
    Automation,
}

impl ValidationMethod {
    pub const ALL: [ValidationMethod; 5] = [
        ValidationMethod::Documentation,
        ValidationMethod::Interview,
        ValidationMethod::Observation,
        ValidationMethod::Testing,
        ValidationMethod::Automation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMethod::Documentation => "documentation",
            ValidationMethod::Interview => "interview",
            ValidationMethod::Observation => "observation",
            ValidationMethod::Testing => "testing",
            ValidationMethod::Automation => "automation",
        }
    }
}

impl fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| ParseEnumError::new("category", s, &Self::ALL.map(Self::as_str)))
    }
}

impl FromStr for ControlType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| ParseEnumError::new("control type", s, &Self::ALL.map(Self::as_str)))
    }
}

impl FromStr for ControlStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| ParseEnumError::new("status", s, &Self::ALL.map(Self::as_str)))
    }
}

impl FromStr for ValidationMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| {
                ParseEnumError::new("validation method", s, &Self::ALL.map(Self::as_str))
            })
    }
}
