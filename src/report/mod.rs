pub mod clean;
pub mod fields;
pub mod labs;
pub mod sections;

pub use clean::{NOT_AVAILABLE, clean, clean_text};
pub use fields::{ExtractedFields, FieldExtractor, FieldKey};
pub use labs::{LabScan, extract_lab_results};
pub use sections::{Section, SectionMap, segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientMetadata {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub id: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabFlag {
    High,
    Low,
    Normal,
}

impl LabFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            LabFlag::High => "High",
            LabFlag::Low => "Low",
            LabFlag::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabTestResult {
    pub test_name: String,
    pub value: String,
    /// Unit or reference-range text trailing the value.
    pub unit: String,
    pub flag: LabFlag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedPersonnel {
    pub primary_doctor: String,
    pub specialization: String,
    pub referred_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicalRecord {
    pub patient: PatientMetadata,
    pub lab: LabInfo,
    pub test_results: Vec<LabTestResult>,
    pub remarks: String,
    pub personnel: AuthorizedPersonnel,
}

impl ClinicalRecord {
    /// Assemble a record from extracted fields and lab results. Missing
    /// sections leave their fields at [`NOT_AVAILABLE`].
    pub fn assemble(
        extracted: &ExtractedFields,
        test_results: Vec<LabTestResult>,
        sections: &SectionMap,
    ) -> Self {
        Self {
            patient: PatientMetadata {
                name: extracted.get(FieldKey::PatientName).to_string(),
                age: extracted.get(FieldKey::PatientAge).to_string(),
                gender: extracted.get(FieldKey::PatientGender).to_string(),
                id: extracted.get(FieldKey::PatientId).to_string(),
                address: extracted.get(FieldKey::PatientAddress).to_string(),
            },
            lab: LabInfo {
                name: extracted.get(FieldKey::LabName).to_string(),
                address: extracted.get(FieldKey::LabAddress).to_string(),
                phone: extracted.get(FieldKey::LabPhone).to_string(),
                website: extracted.get(FieldKey::LabWebsite).to_string(),
            },
            test_results,
            remarks: clean_text(sections.get(Section::RemarksAndResults)),
            personnel: AuthorizedPersonnel {
                primary_doctor: extracted.get(FieldKey::PrimaryDoctor).to_string(),
                specialization: extracted.get(FieldKey::Specialization).to_string(),
                referred_by: extracted.get(FieldKey::ReferredBy).to_string(),
            },
        }
    }
}
