use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientMetadata {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub patient_id: String,
    pub patient_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaboratoryInfo {
    pub lab_name: String,
    pub lab_address: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub value: String,
    pub unit: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizedPersonnel {
    pub primary_doctor: String,
    pub specialization: String,
    pub referred_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub patient_metadata: PatientMetadata,
    pub laboratory_info: LaboratoryInfo,
    pub test_results: Vec<TestResult>,
    pub clinical_remarks: String,
    pub authorized_personnel: AuthorizedPersonnel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub marker: String,
    pub numeric: Option<f64>,
    pub value: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbnormalFinding {
    pub marker: String,
    pub value: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub final_risk: String,
    pub ml_risk: String,
    /// Probabilities in LOW, MEDIUM, HIGH order.
    pub confidence: [f64; 3],
    pub reason: String,
    pub overridden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input: String,
    pub record: ClinicalRecord,
    pub observations: Vec<Observation>,
    pub abnormal_findings: Vec<AbnormalFinding>,
    pub features: Vec<Feature>,
    pub risk: Risk,
    pub summary: String,
}
