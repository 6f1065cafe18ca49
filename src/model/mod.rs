pub mod forest;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::scores::{FeatureVector, RiskClass};

pub use forest::ForestClassifier;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class: RiskClass,
    /// Probability per class in [`RiskClass::ALL`] order.
    pub distribution: [f64; 3],
}

/// Trained risk model. Implementations are loaded once and shared across
/// reports, so prediction must not mutate state.
pub trait RiskClassifier: Send + Sync {
    fn name(&self) -> &str;
    fn predict(&self, features: &FeatureVector) -> Prediction;
}

/// Load the classifier named by `path`, or the bundled artifact when absent.
pub fn load_classifier(path: Option<&Path>) -> Result<Arc<dyn RiskClassifier>> {
    let classifier = match path {
        Some(path) => ForestClassifier::load(path)?,
        None => ForestClassifier::builtin()?,
    };
    Ok(Arc::new(classifier))
}
