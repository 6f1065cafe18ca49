use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::report::clean::{NOT_AVAILABLE, clean};
use crate::report::sections::{Section, SectionMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    PatientName,
    PatientAge,
    PatientGender,
    PatientId,
    PatientAddress,
    LabName,
    LabAddress,
    LabPhone,
    LabWebsite,
    PrimaryDoctor,
    Specialization,
    ReferredBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Everything after the colon up to the end of the line.
    RestOfLine,
    /// A single word token after the colon.
    Word,
}

/// One entry of the extraction schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub section: Section,
    /// Accepted label spellings, matched case-sensitively.
    pub labels: &'static [&'static str],
    pub capture: Capture,
    /// Case-insensitive substring the section must contain before the label is tried.
    pub guard: Option<&'static str>,
}

pub const STANDARD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: FieldKey::PatientName,
        section: Section::UserInfo,
        labels: &["Patient Name"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::PatientAge,
        section: Section::UserInfo,
        labels: &["Age"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::PatientGender,
        section: Section::UserInfo,
        labels: &["Gender"],
        capture: Capture::Word,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::PatientId,
        section: Section::UserInfo,
        labels: &["ID"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::PatientAddress,
        section: Section::UserInfo,
        labels: &["Address"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::LabName,
        section: Section::LabInfo,
        labels: &["Clinic/Laboratory Name", "Laboratory Name"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::LabAddress,
        section: Section::LabInfo,
        labels: &["Address"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::LabPhone,
        section: Section::LabInfo,
        labels: &["Tel"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::LabWebsite,
        section: Section::LabInfo,
        labels: &["Website"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::PrimaryDoctor,
        section: Section::DoctorInfo,
        labels: &["Doctor's Name", "Doctor's name"],
        capture: Capture::RestOfLine,
        guard: Some("doctor's"),
    },
    FieldSpec {
        key: FieldKey::Specialization,
        section: Section::DoctorInfo,
        labels: &["Specialization"],
        capture: Capture::RestOfLine,
        guard: None,
    },
    FieldSpec {
        key: FieldKey::ReferredBy,
        section: Section::DoctorInfo,
        labels: &["Referred by"],
        capture: Capture::RestOfLine,
        guard: None,
    },
];

#[derive(Debug)]
pub struct Field {
    spec: FieldSpec,
    pattern: Regex,
}

impl Field {
    pub fn compile(spec: FieldSpec) -> Result<Self> {
        let labels = spec
            .labels
            .iter()
            .map(|l| regex::escape(l))
            .collect::<Vec<_>>()
            .join("|");
        let capture = match spec.capture {
            Capture::RestOfLine => r"([^\n]*)",
            Capture::Word => r"(\w+)",
        };
        let source = format!(r"\b(?:{}):[ \t]*{}", labels, capture);
        let pattern = Regex::new(&source)
            .with_context(|| format!("invalid pattern for field {:?}", spec.key))?;
        Ok(Self { spec, pattern })
    }

    pub fn key(&self) -> FieldKey {
        self.spec.key
    }

    /// Extracted value, or [`NOT_AVAILABLE`] when the section or label is missing.
    pub fn extract(&self, sections: &SectionMap) -> String {
        let Some(body) = sections.get(self.spec.section) else {
            return NOT_AVAILABLE.to_string();
        };
        if let Some(guard) = self.spec.guard {
            if !body.to_lowercase().contains(guard) {
                return NOT_AVAILABLE.to_string();
            }
        }
        match self.pattern.captures(body).and_then(|caps| caps.get(1)) {
            Some(m) => clean(m.as_str()),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FieldExtractor {
    fields: Vec<Field>,
}

static STANDARD: LazyLock<FieldExtractor> =
    LazyLock::new(|| FieldExtractor::new(STANDARD_FIELDS).expect("valid field patterns"));

impl FieldExtractor {
    pub fn new(specs: &[FieldSpec]) -> Result<Self> {
        let fields = specs
            .iter()
            .copied()
            .map(Field::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { fields })
    }

    pub fn standard() -> &'static FieldExtractor {
        &STANDARD
    }

    pub fn extract(&self, sections: &SectionMap) -> ExtractedFields {
        let values = self
            .fields
            .iter()
            .map(|f| (f.key(), f.extract(sections)))
            .collect();
        ExtractedFields { values }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    values: HashMap<FieldKey, String>,
}

impl ExtractedFields {
    pub fn get(&self, key: FieldKey) -> &str {
        self.values
            .get(&key)
            .map(String::as_str)
            .unwrap_or(NOT_AVAILABLE)
    }
}
