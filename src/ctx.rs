use std::path::{Path, PathBuf};

use crate::model::Prediction;
use crate::report::{ClinicalRecord, ExtractedFields, SectionMap};
use crate::scores::{FeatureVector, NormalizedLabs, RiskVerdict};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub txt_path: PathBuf,
}

/// Per-report working state. Every report gets its own context; nothing here
/// is shared between reports.
#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub label: String,
    pub write_json: bool,
    pub write_txt: bool,
    pub raw_text: Option<String>,
    pub sections: SectionMap,
    pub fields: ExtractedFields,
    pub record: Option<ClinicalRecord>,
    pub normalized: Option<NormalizedLabs>,
    pub features: Option<FeatureVector>,
    pub prediction: Option<Prediction>,
    pub verdict: Option<RiskVerdict>,
    pub report_text: Option<String>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    /// `out_root` receives one `<label>/` directory per report.
    pub fn new(input: PathBuf, out_root: PathBuf, write_json: bool, write_txt: bool) -> Self {
        let label = label_from_path(&input);
        let out_dir = out_root.join(&label);
        let json_path = out_dir.join("report.json");
        let txt_path = out_dir.join("report.txt");
        Self {
            input,
            label,
            write_json,
            write_txt,
            raw_text: None,
            sections: SectionMap::default(),
            fields: ExtractedFields::default(),
            record: None,
            normalized: None,
            features: None,
            prediction: None,
            verdict: None,
            report_text: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                txt_path,
            },
        }
    }

    /// Context over in-memory text; nothing is read from or written to disk.
    pub fn from_text(label: &str, text: &str) -> Self {
        let mut ctx = Self::new(PathBuf::from(label), PathBuf::from("."), false, false);
        ctx.label = label.to_string();
        ctx.raw_text = Some(text.to_string());
        ctx
    }
}

pub fn label_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("report")
        .to_string()
}
