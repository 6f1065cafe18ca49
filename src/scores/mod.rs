pub mod features;
pub mod normalize;
pub mod risk;

pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, build_feature_vector};
pub use normalize::{classify, extract_age, extract_numeric, marker_key, normalize};
pub use risk::{OverrideReason, apply_override};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Low,
    High,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "NORMAL",
            Status::Low => "LOW",
            Status::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub marker: String,
    pub numeric: Option<f64>,
    pub display: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbnormalFinding {
    pub marker: String,
    pub display: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLabs {
    pub age: u32,
    pub observations: Vec<Observation>,
    pub abnormal_findings: Vec<AbnormalFinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    /// Class order of every confidence distribution.
    pub const ALL: [RiskClass; 3] = [RiskClass::Low, RiskClass::Medium, RiskClass::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskClass::Low => "LOW",
            RiskClass::Medium => "MEDIUM",
            RiskClass::High => "HIGH",
        }
    }

    pub fn index(self) -> usize {
        match self {
            RiskClass::Low => 0,
            RiskClass::Medium => 1,
            RiskClass::High => 2,
        }
    }
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskVerdict {
    pub final_risk: RiskClass,
    pub ml_risk: RiskClass,
    /// Probability per class in [`RiskClass::ALL`] order.
    pub confidence: [f64; 3],
    pub reason: OverrideReason,
}
