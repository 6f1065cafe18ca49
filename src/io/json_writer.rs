use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::{
    AbnormalFinding, AuthorizedPersonnel, ClinicalRecord, Feature, LaboratoryInfo, Observation,
    PatientMetadata, ReportV1, Risk, TestResult,
};

pub fn build_record(record: &crate::report::ClinicalRecord) -> ClinicalRecord {
    ClinicalRecord {
        patient_metadata: PatientMetadata {
            name: record.patient.name.clone(),
            age: record.patient.age.clone(),
            gender: record.patient.gender.clone(),
            patient_id: record.patient.id.clone(),
            patient_address: record.patient.address.clone(),
        },
        laboratory_info: LaboratoryInfo {
            lab_name: record.lab.name.clone(),
            lab_address: record.lab.address.clone(),
            phone: record.lab.phone.clone(),
            website: record.lab.website.clone(),
        },
        test_results: record
            .test_results
            .iter()
            .map(|t| TestResult {
                test_name: t.test_name.clone(),
                value: t.value.clone(),
                unit: t.unit.clone(),
                status: t.flag.as_str().to_string(),
            })
            .collect(),
        clinical_remarks: record.remarks.clone(),
        authorized_personnel: AuthorizedPersonnel {
            primary_doctor: record.personnel.primary_doctor.clone(),
            specialization: record.personnel.specialization.clone(),
            referred_by: record.personnel.referred_by.clone(),
        },
    }
}

pub fn build_report(ctx: &Ctx) -> Result<ReportV1> {
    let record = ctx.record.as_ref().context("clinical record missing")?;
    let labs = ctx.normalized.as_ref().context("observations missing")?;
    let features = ctx.features.as_ref().context("feature vector missing")?;
    let verdict = ctx.verdict.as_ref().context("risk verdict missing")?;
    let summary = ctx.report_text.as_ref().context("report text missing")?;

    let observations = labs
        .observations
        .iter()
        .map(|o| Observation {
            marker: o.marker.clone(),
            numeric: o.numeric,
            value: o.display.clone(),
            status: o.status.as_str().to_string(),
        })
        .collect();

    let abnormal_findings = labs
        .abnormal_findings
        .iter()
        .map(|a| AbnormalFinding {
            marker: a.marker.clone(),
            value: a.display.clone(),
            status: a.status.as_str().to_string(),
        })
        .collect();

    let features = features
        .named()
        .map(|(name, value)| Feature {
            name: name.to_string(),
            value,
        })
        .collect();

    Ok(ReportV1 {
        tool: "labrisk".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input: ctx.label.clone(),
        record: build_record(record),
        observations,
        abnormal_findings,
        features,
        risk: Risk {
            final_risk: verdict.final_risk.as_str().to_string(),
            ml_risk: verdict.ml_risk.as_str().to_string(),
            confidence: verdict.confidence,
            reason: verdict.reason.as_str().to_string(),
            overridden: verdict.reason.is_override(),
        },
        summary: summary.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
