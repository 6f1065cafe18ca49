use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::build_feature_vector;

pub struct Stage6Features;

impl Stage6Features {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Features {
    fn name(&self) -> &'static str {
        "stage6_features"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let labs = ctx.normalized.as_ref().context("observations missing")?;
        let features = build_feature_vector(labs);
        info!(
            severity_score = features.severity_score(),
            "feature_vector_ready"
        );
        ctx.features = Some(features);
        Ok(())
    }
}
