use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::report::FieldExtractor;

pub struct Stage3Fields {
    extractor: &'static FieldExtractor,
}

impl Stage3Fields {
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::standard(),
        }
    }
}

impl Stage for Stage3Fields {
    fn name(&self) -> &'static str {
        "stage3_fields"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.fields = self.extractor.extract(&ctx.sections);
        info!("fields_ready");
        Ok(())
    }
}
