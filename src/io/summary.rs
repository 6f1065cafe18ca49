use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let record = ctx.record.as_ref().context("clinical record missing")?;
    let labs = ctx.normalized.as_ref().context("observations missing")?;
    let verdict = ctx.verdict.as_ref().context("risk verdict missing")?;

    let mut out = String::new();
    out.push_str(&format!("labrisk v{}\n", version));
    out.push_str(&format!(
        "Input: {}, {} tests, {} abnormal\n",
        ctx.label,
        record.test_results.len(),
        labs.abnormal_findings.len()
    ));
    out.push_str(&format!(
        "Risk: {} (ml={}, reason={})\n",
        verdict.final_risk,
        verdict.ml_risk,
        verdict.reason.as_str()
    ));
    out.push_str(&format!(
        "Confidence: LOW={:.2} MEDIUM={:.2} HIGH={:.2}\n",
        verdict.confidence[0], verdict.confidence[1], verdict.confidence[2]
    ));
    Ok(out)
}

/// Short record listing for `validate`, which runs extraction only.
pub fn format_record_summary(ctx: &Ctx) -> Result<String> {
    let record = ctx.record.as_ref().context("clinical record missing")?;
    let mut out = String::new();
    out.push_str("labrisk validate ok\n");
    out.push_str(&format!("sections: {}\n", ctx.sections.len()));
    out.push_str(&format!("patient: {}\n", record.patient.name));
    out.push_str(&format!("lab: {}\n", record.lab.name));
    out.push_str(&format!("tests: {}\n", record.test_results.len()));
    for result in &record.test_results {
        out.push_str(&format!(
            "- {}\t{}\t{}\t{}\n",
            result.test_name,
            result.value,
            result.unit,
            result.flag.as_str()
        ));
    }
    Ok(out)
}
