use std::sync::LazyLock;

use regex::Regex;

use crate::reference::{RangeDef, ReferenceRanges};
use crate::report::{LabTestResult, NOT_AVAILABLE};
use crate::scores::{AbnormalFinding, NormalizedLabs, Observation, Status};

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d*\.?\d+").expect("valid regex"));
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Lookup key for a test name: "WBC COUNT" -> "wbc_count".
pub fn marker_key(test_name: &str) -> String {
    test_name.to_uppercase().to_lowercase().replace(' ', "_")
}

/// First decimal number anywhere in the value text. A bare leading dot
/// (".5") reads as 0.5.
pub fn extract_numeric(value: &str) -> Option<f64> {
    NUMBER_RE
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// First integer in a raw age such as "28 YRS"; 0 when there is none.
pub fn extract_age(raw: &str) -> u32 {
    INTEGER_RE
        .find(raw)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Bounds are inclusive: only values strictly outside the range are abnormal.
pub fn classify(numeric: Option<f64>, range: Option<&RangeDef>) -> Status {
    match (numeric, range) {
        (Some(v), Some(r)) if v < r.lower => Status::Low,
        (Some(v), Some(r)) if v > r.upper => Status::High,
        _ => Status::Normal,
    }
}

pub fn normalize(results: &[LabTestResult], age_raw: &str, ranges: &ReferenceRanges) -> NormalizedLabs {
    let mut observations = Vec::with_capacity(results.len());
    let mut abnormal_findings = Vec::new();

    for result in results {
        let marker = marker_key(&result.test_name);
        let numeric = extract_numeric(&result.value);
        let status = classify(numeric, ranges.get(&marker));
        let display = display_value(result);

        if status != Status::Normal {
            abnormal_findings.push(AbnormalFinding {
                marker: marker.clone(),
                display: display.clone(),
                status,
            });
        }
        observations.push(Observation {
            marker,
            numeric,
            display,
            status,
        });
    }

    NormalizedLabs {
        age: extract_age(age_raw),
        observations,
        abnormal_findings,
    }
}

fn display_value(result: &LabTestResult) -> String {
    if result.unit == NOT_AVAILABLE {
        return result.value.trim().to_string();
    }
    format!("{} {}", result.value, result.unit).trim().to_string()
}
