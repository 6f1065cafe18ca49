use crate::model::Prediction;
use crate::scores::{FeatureVector, RiskClass, RiskVerdict};

const SEVERITY_THRESHOLD: f64 = 4.0;
const HIGH_COUNT_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideReason {
    HighCumulativeSeverity,
    MultipleHighValues,
    MlEstimation,
}

impl OverrideReason {
    pub fn as_str(self) -> &'static str {
        match self {
            OverrideReason::HighCumulativeSeverity => "high cumulative severity",
            OverrideReason::MultipleHighValues => "multiple abnormal high values",
            OverrideReason::MlEstimation => "ml risk estimation",
        }
    }

    pub fn is_override(self) -> bool {
        !matches!(self, OverrideReason::MlEstimation)
    }
}

/// Clinical guardrail applied after classification. The first matching rule
/// wins and a rule can only raise the verdict to HIGH.
pub fn apply_override(features: &FeatureVector, prediction: &Prediction) -> RiskVerdict {
    let (final_risk, reason) = if features.severity_score() >= SEVERITY_THRESHOLD {
        (RiskClass::High, OverrideReason::HighCumulativeSeverity)
    } else if features.high_count() >= HIGH_COUNT_THRESHOLD {
        (RiskClass::High, OverrideReason::MultipleHighValues)
    } else {
        (prediction.class, OverrideReason::MlEstimation)
    };

    RiskVerdict {
        final_risk,
        ml_risk: prediction.class,
        confidence: prediction.distribution,
        reason,
    }
}
