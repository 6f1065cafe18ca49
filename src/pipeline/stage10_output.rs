use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, write_text};
use crate::pipeline::Stage;

pub struct Stage10Output;

impl Stage10Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage10Output {
    fn name(&self) -> &'static str {
        "stage10_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
        }
        if ctx.write_txt {
            let text = ctx.report_text.as_deref().context("report text missing")?;
            write_text(&ctx.output.txt_path, text)?;
        }

        info!(out_dir = %ctx.output.out_dir.display(), "stage10_output_ready");
        Ok(())
    }
}
