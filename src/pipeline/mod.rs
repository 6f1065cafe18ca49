use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::model::RiskClassifier;
use crate::reference::ReferenceTables;

pub mod batch;
pub mod stage0_scaffold;
pub mod stage10_output;
pub mod stage1_input;
pub mod stage2_sections;
pub mod stage3_fields;
pub mod stage4_labs;
pub mod stage5_normalize;
pub mod stage6_features;
pub mod stage7_classify;
pub mod stage8_override;
pub mod stage9_compose;

pub use batch::{check_distinct_outputs, run_batch};
use stage0_scaffold::Stage0Scaffold;
use stage1_input::Stage1Input;
use stage2_sections::Stage2Sections;
use stage3_fields::Stage3Fields;
use stage4_labs::Stage4Labs;
use stage5_normalize::Stage5Normalize;
use stage6_features::Stage6Features;
use stage7_classify::Stage7Classify;
use stage8_override::Stage8Override;
use stage9_compose::Stage9Compose;
use stage10_output::Stage10Output;

/// Stages hold only read-only configuration, so one pipeline can serve
/// several reports at once.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Full run: read, extract, score, compose and write.
    pub fn standard(classifier: Arc<dyn RiskClassifier>, tables: Arc<ReferenceTables>) -> Self {
        Self::new(vec![
            Box::new(Stage0Scaffold::new()),
            Box::new(Stage1Input::new()),
            Box::new(Stage2Sections::new()),
            Box::new(Stage3Fields::new()),
            Box::new(Stage4Labs::new()),
            Box::new(Stage5Normalize::new(tables.clone())),
            Box::new(Stage6Features::new()),
            Box::new(Stage7Classify::new(classifier)),
            Box::new(Stage8Override::new()),
            Box::new(Stage9Compose::new(tables)),
            Box::new(Stage10Output::new()),
        ])
    }

    /// Extraction only; no classifier is needed.
    pub fn extraction() -> Self {
        Self::new(vec![
            Box::new(Stage1Input::new()),
            Box::new(Stage2Sections::new()),
            Box::new(Stage3Fields::new()),
            Box::new(Stage4Labs::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(label = %ctx.label, "report started");
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
