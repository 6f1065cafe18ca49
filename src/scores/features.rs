use std::collections::HashMap;

use crate::scores::{NormalizedLabs, Status};

pub const FEATURE_COUNT: usize = 11;

/// Slot order shared with the classifier artifact. Never reorder.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "hemoglobin",
    "wbc_count",
    "platelet_count",
    "crp",
    "esr",
    "glucose_fasting",
    "creatinine",
    "low_count",
    "high_count",
    "severity_score",
];

const LAB_SLOTS: [&str; 7] = [
    "hemoglobin",
    "wbc_count",
    "platelet_count",
    "crp",
    "esr",
    "glucose_fasting",
    "creatinine",
];

const LOW_COUNT_SLOT: usize = 8;
const HIGH_COUNT_SLOT: usize = 9;
const SEVERITY_SLOT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied()
    }

    pub fn low_count(&self) -> f64 {
        self.0[LOW_COUNT_SLOT]
    }

    pub fn high_count(&self) -> f64 {
        self.0[HIGH_COUNT_SLOT]
    }

    pub fn severity_score(&self) -> f64 {
        self.0[SEVERITY_SLOT]
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

pub fn build_feature_vector(labs: &NormalizedLabs) -> FeatureVector {
    // Later observations of a marker overwrite earlier ones.
    let mut lab: HashMap<&str, f64> = HashMap::new();
    for obs in &labs.observations {
        if let Some(v) = obs.numeric {
            lab.insert(obs.marker.as_str(), v);
        }
    }

    let low_count = labs
        .abnormal_findings
        .iter()
        .filter(|a| a.status == Status::Low)
        .count();
    let high_count = labs
        .abnormal_findings
        .iter()
        .filter(|a| a.status == Status::High)
        .count();
    let severity_score = low_count + 2 * high_count;

    let mut values = [0.0f64; FEATURE_COUNT];
    values[0] = labs.age as f64;
    for (slot, marker) in LAB_SLOTS.iter().enumerate() {
        values[slot + 1] = lab.get(marker).copied().unwrap_or(0.0);
    }
    values[LOW_COUNT_SLOT] = low_count as f64;
    values[HIGH_COUNT_SLOT] = high_count as f64;
    values[SEVERITY_SLOT] = severity_score as f64;
    FeatureVector(values)
}
