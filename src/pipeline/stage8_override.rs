use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::scores::apply_override;

pub struct Stage8Override;

impl Stage8Override {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage8Override {
    fn name(&self) -> &'static str {
        "stage8_override"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let features = ctx.features.as_ref().context("feature vector missing")?;
        let prediction = ctx.prediction.as_ref().context("ml prediction missing")?;
        let verdict = apply_override(features, prediction);
        info!(
            final_risk = verdict.final_risk.as_str(),
            overridden = verdict.reason.is_override(),
            reason = verdict.reason.as_str(),
            "risk_verdict_ready"
        );
        ctx.verdict = Some(verdict);
        Ok(())
    }
}
