use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.raw_text.is_some() {
            return Ok(());
        }
        let text = std::fs::read_to_string(&ctx.input)
            .with_context(|| format!("failed to read report {}", ctx.input.display()))?;
        info!(
            input = %ctx.input.display(),
            bytes = text.len() as u64,
            "report_text_loaded"
        );
        ctx.raw_text = Some(text);
        Ok(())
    }
}
