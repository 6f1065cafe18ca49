use std::collections::HashMap;
use std::path::Path;

use anyhow::{Result, bail};

use crate::ctx::Ctx;
use crate::pipeline::Pipeline;

#[cfg(feature = "mt")]
use rayon::prelude::*;

/// Run every context through `pipeline`, returning them in input order.
/// Reports are independent; with the `mt` feature they run on a pool of
/// `threads` workers (0 = one per CPU).
pub fn run_batch(pipeline: &Pipeline, ctxs: Vec<Ctx>, threads: usize) -> Result<Vec<Ctx>> {
    check_distinct_outputs(&ctxs)?;
    #[cfg(feature = "mt")]
    {
        if ctxs.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| anyhow::anyhow!("failed to build thread pool: {}", e))?;
            return pool.install(|| {
                ctxs.into_par_iter()
                    .map(|mut ctx| {
                        pipeline.run(&mut ctx)?;
                        Ok(ctx)
                    })
                    .collect::<Result<Vec<_>>>()
            });
        }
    }
    #[cfg(not(feature = "mt"))]
    let _ = threads;

    ctxs.into_iter()
        .map(|mut ctx| {
            pipeline.run(&mut ctx)?;
            Ok(ctx)
        })
        .collect()
}

/// Reject a batch in which two writing reports share an output directory.
pub fn check_distinct_outputs(ctxs: &[Ctx]) -> Result<()> {
    let mut seen: HashMap<&Path, &Path> = HashMap::new();
    for ctx in ctxs.iter().filter(|c| c.write_json || c.write_txt) {
        if let Some(first) = seen.insert(&ctx.output.out_dir, &ctx.input) {
            bail!(
                "inputs {} and {} both write to {}; rename one of them",
                first.display(),
                ctx.input.display(),
                ctx.output.out_dir.display()
            );
        }
    }
    Ok(())
}
