use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::reference::ReferenceTables;
use crate::scores::normalize;

pub struct Stage5Normalize {
    tables: Arc<ReferenceTables>,
}

impl Stage5Normalize {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }
}

impl Stage for Stage5Normalize {
    fn name(&self) -> &'static str {
        "stage5_normalize"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let record = ctx.record.as_ref().context("clinical record missing")?;
        let labs = normalize(&record.test_results, &record.patient.age, &self.tables.ranges);
        info!(
            observations = labs.observations.len() as u64,
            abnormal = labs.abnormal_findings.len() as u64,
            "observations_ready"
        );
        ctx.normalized = Some(labs);
        Ok(())
    }
}
