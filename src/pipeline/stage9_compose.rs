use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::composer::compose_report;
use crate::pipeline::Stage;
use crate::reference::ReferenceTables;

pub struct Stage9Compose {
    tables: Arc<ReferenceTables>,
}

impl Stage9Compose {
    pub fn new(tables: Arc<ReferenceTables>) -> Self {
        Self { tables }
    }
}

impl Stage for Stage9Compose {
    fn name(&self) -> &'static str {
        "stage9_compose"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let labs = ctx.normalized.as_ref().context("observations missing")?;
        let verdict = ctx.verdict.as_ref().context("risk verdict missing")?;
        let text = compose_report(labs, verdict, &self.tables.abbreviations);
        info!(lines = text.lines().count() as u64, "report_text_ready");
        ctx.report_text = Some(text);
        Ok(())
    }
}
