use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::report::{Section, segment};

pub struct Stage2Sections;

impl Stage2Sections {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Sections {
    fn name(&self) -> &'static str {
        "stage2_sections"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let raw = ctx.raw_text.as_deref().context("report text missing")?;
        let sections = segment(raw);

        if sections.is_empty() {
            warn!(label = %ctx.label, "no section headers recognised");
            ctx.warnings
                .push("no section headers recognised; record uses defaults".to_string());
        } else {
            for section in Section::ALL {
                if !sections.contains(section) {
                    ctx.warnings
                        .push(format!("section {} missing", section.name()));
                }
            }
        }
        info!(sections = sections.len() as u64, "sections_ready");
        ctx.sections = sections;
        Ok(())
    }
}
