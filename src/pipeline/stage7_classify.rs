use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::model::RiskClassifier;
use crate::pipeline::Stage;

pub struct Stage7Classify {
    classifier: Arc<dyn RiskClassifier>,
}

impl Stage7Classify {
    pub fn new(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self { classifier }
    }
}

impl Stage for Stage7Classify {
    fn name(&self) -> &'static str {
        "stage7_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let features = ctx.features.as_ref().context("feature vector missing")?;
        let prediction = self.classifier.predict(features);
        info!(
            model = self.classifier.name(),
            ml_risk = prediction.class.as_str(),
            "ml_prediction_ready"
        );
        ctx.prediction = Some(prediction);
        Ok(())
    }
}
