use labrisk::reference::{RangeDef, ReferenceRanges, ReferenceTables};
use labrisk::report::labs::{LineOutcome, scan_line};
use labrisk::report::{LabFlag, LabTestResult, NOT_AVAILABLE};
use labrisk::scores::{Status, classify, extract_age, extract_numeric, marker_key, normalize};

fn lab(name: &str, value: &str, unit: &str) -> LabTestResult {
    LabTestResult {
        test_name: name.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        flag: LabFlag::Normal,
    }
}

fn ranges() -> ReferenceRanges {
    ReferenceTables::builtin().unwrap().ranges
}

#[test]
fn marker_key_is_deterministic() {
    assert_eq!(marker_key("WBC COUNT"), "wbc_count");
    assert_eq!(marker_key("Hemoglobin"), "hemoglobin");
    assert_eq!(marker_key("EOSINOPHILS %"), "eosinophils_%");
    assert_eq!(marker_key("PLATELET COUNT"), marker_key("PLATELET COUNT"));
}

#[test]
fn numeric_is_first_decimal_token() {
    assert_eq!(extract_numeric("9.0"), Some(9.0));
    assert_eq!(extract_numeric("measuring 2.5 x 1.5 cm"), Some(2.5));
    assert_eq!(extract_numeric(".5"), Some(0.5));
    assert_eq!(extract_numeric("0.5"), Some(0.5));
    assert_eq!(extract_numeric("161"), Some(161.0));
    assert_eq!(extract_numeric("positive"), None);
    assert_eq!(extract_numeric(""), None);
}

#[test]
fn age_is_first_integer() {
    assert_eq!(extract_age("28 YRS"), 28);
    assert_eq!(extract_age("N/A"), 0);
    assert_eq!(extract_age("Age 3.5"), 3);
}

#[test]
fn bounds_are_inclusive() {
    let range = RangeDef {
        marker: "x".to_string(),
        lower: 12.0,
        upper: 17.5,
    };
    assert_eq!(classify(Some(11.99), Some(&range)), Status::Low);
    assert_eq!(classify(Some(12.0), Some(&range)), Status::Normal);
    assert_eq!(classify(Some(17.5), Some(&range)), Status::Normal);
    assert_eq!(classify(Some(17.51), Some(&range)), Status::High);
    assert_eq!(classify(None, Some(&range)), Status::Normal);
    assert_eq!(classify(Some(1000.0), None), Status::Normal);
}

#[test]
fn hemoglobin_low_becomes_finding() {
    let labs = normalize(&[lab("HEMOGLOBIN", "9.0", "g/dL")], "28 YRS", &ranges());
    assert_eq!(labs.age, 28);
    let obs = &labs.observations[0];
    assert_eq!(obs.marker, "hemoglobin");
    assert_eq!(obs.numeric, Some(9.0));
    assert_eq!(obs.display, "9.0 g/dL");
    assert_eq!(obs.status, Status::Low);
    assert_eq!(labs.abnormal_findings.len(), 1);
    assert_eq!(labs.abnormal_findings[0].marker, "hemoglobin");
    assert_eq!(labs.abnormal_findings[0].status, Status::Low);
}

#[test]
fn unknown_and_qualitative_are_normal() {
    let labs = normalize(
        &[
            lab("EOSINOPHILS %", "7.32", "%"),
            lab("HER2", "positive", NOT_AVAILABLE),
        ],
        "N/A",
        &ranges(),
    );
    assert_eq!(labs.observations.len(), 2);
    assert!(labs.observations.iter().all(|o| o.status == Status::Normal));
    assert_eq!(labs.observations[1].numeric, None);
    assert_eq!(labs.observations[1].display, "positive");
    assert!(labs.abnormal_findings.is_empty());
}

#[test]
fn repeated_markers_are_not_deduplicated() {
    let labs = normalize(
        &[lab("CRP", "5.0", "mg/L"), lab("CRP", "6.0", "mg/L")],
        "40",
        &ranges(),
    );
    assert_eq!(labs.observations.len(), 2);
    assert_eq!(labs.abnormal_findings.len(), 2);
    assert_eq!(labs.abnormal_findings[1].display, "6.0 mg/L");
}

#[test]
fn alternate_table_changes_classification() {
    let custom = ReferenceRanges::new(
        "test",
        vec![RangeDef {
            marker: "hemoglobin".to_string(),
            lower: 5.0,
            upper: 8.0,
        }],
    );
    let labs = normalize(&[lab("HEMOGLOBIN", "9.0", "g/dL")], "1", &custom);
    assert_eq!(labs.observations[0].status, Status::High);
}

#[test]
fn leading_dot_value_is_below_range() {
    let r = scan_line("CREATININE: .5 mg/dL");
    let LineOutcome::Result(result) = r else {
        panic!("expected a lab result, got {:?}", r);
    };
    let labs = normalize(&[result], "50", &ranges());
    let obs = &labs.observations[0];
    assert_eq!(obs.marker, "creatinine");
    assert_eq!(obs.numeric, Some(0.5));
    assert_eq!(obs.status, Status::Low);
    assert_eq!(obs.display, ".5 mg/dL");
    assert_eq!(labs.abnormal_findings.len(), 1);
    assert_eq!(labs.abnormal_findings[0].status, Status::Low);
}
