use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::report::{ClinicalRecord, Section, extract_lab_results};

pub struct Stage4Labs;

impl Stage4Labs {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Labs {
    fn name(&self) -> &'static str {
        "stage4_labs"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let scan = ctx
            .sections
            .get(Section::TestsAndValues)
            .map(extract_lab_results)
            .unwrap_or_default();
        for line in &scan.narrative {
            warn!(line = line.as_str(), "narrative line skipped");
        }

        info!(
            tests = scan.results.len() as u64,
            narrative_lines = scan.narrative.len() as u64,
            "lab_results_ready"
        );
        ctx.record = Some(ClinicalRecord::assemble(
            &ctx.fields,
            scan.results,
            &ctx.sections,
        ));
        Ok(())
    }
}
