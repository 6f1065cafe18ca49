use labrisk::report::labs::{LineOutcome, scan_line};
use labrisk::report::{LabFlag, LabTestResult, NOT_AVAILABLE, extract_lab_results};

fn result(line: &str) -> LabTestResult {
    match scan_line(line) {
        LineOutcome::Result(r) => r,
        other => panic!("expected a lab result for {:?}, got {:?}", line, other),
    }
}

#[test]
fn low_flag_after_unit() {
    let r = result("HEMOGLOBIN: 9.0 g/dL L");
    assert_eq!(r.test_name, "HEMOGLOBIN");
    assert_eq!(r.value, "9.0");
    assert_eq!(r.unit, "g/dL");
    assert_eq!(r.flag, LabFlag::Low);
}

#[test]
fn high_flag_and_reference_text() {
    let r = result("WBC COUNT: 12.5 x10^9/L H");
    assert_eq!(r.test_name, "WBC COUNT");
    assert_eq!(r.unit, "x10^9/L");
    assert_eq!(r.flag, LabFlag::High);

    let r = result("HEMOGLOBIN: 14 g/dl (Reference: 13 - 17)");
    assert_eq!(r.value, "14");
    assert_eq!(r.unit, "g/dl (Reference: 13 - 17)");
    assert_eq!(r.flag, LabFlag::Normal);
}

#[test]
fn unit_ending_in_flag_letter_is_not_a_flag() {
    let r = result("PLATELET COUNT: 161 x10^9/L");
    assert_eq!(r.unit, "x10^9/L");
    assert_eq!(r.flag, LabFlag::Normal);
}

#[test]
fn lowercase_letter_is_not_a_flag() {
    let r = result("HEMOGLOBIN: 9.0 g/dL l");
    assert_eq!(r.unit, "g/dL l");
    assert_eq!(r.flag, LabFlag::Normal);
}

#[test]
fn qualitative_values_kept_verbatim() {
    let r = result("ER (Estrogen Receptor): Positive");
    assert_eq!(r.test_name, "ER (Estrogen Receptor)");
    assert_eq!(r.value, "Positive");
    assert_eq!(r.unit, NOT_AVAILABLE);

    assert_eq!(result("HER2-neu: negative").value, "negative");
    assert_eq!(result("CD20: Patchy positivity").value, "Patchy positivity");
}

#[test]
fn dimension_phrase() {
    let r = result("Lesion size: measuring 2.5 x 1.5 cm");
    assert_eq!(r.test_name, "Lesion size");
    assert_eq!(r.value, "measuring 2.5 x 1.5 cm");
    assert_eq!(r.unit, NOT_AVAILABLE);
}

#[test]
fn percent_in_test_name() {
    let r = result("EOSINOPHILS %: 7.32 % H");
    assert_eq!(r.test_name, "EOSINOPHILS %");
    assert_eq!(r.value, "7.32");
    assert_eq!(r.unit, "%");
    assert_eq!(r.flag, LabFlag::High);
}

#[test]
fn long_test_names_are_narrative() {
    let line = "This is a long narrative sentence that goes on and on and mentions Hemoglobin: 14 g/dl";
    assert_eq!(scan_line(line), LineOutcome::Narrative);
}

#[test]
fn ten_word_test_name_is_kept() {
    let line = "one two three four five six seven eight nine ten: 5";
    assert!(matches!(scan_line(line), LineOutcome::Result(_)));
}

#[test]
fn non_matching_lines() {
    assert_eq!(scan_line("Signature present"), LineOutcome::NoMatch);
    assert_eq!(scan_line("Remarks: see attached"), LineOutcome::NoMatch);
    assert_eq!(scan_line(""), LineOutcome::NoMatch);
}

#[test]
fn results_keep_line_order() {
    let body = "HEMOGLOBIN: 9.0 g/dL L\nnoise line\nCRP: 5.2 mg/L H\nHEMOGLOBIN: 10.1 g/dL L";
    let results = extract_lab_results(body).results;
    let names: Vec<&str> = results.iter().map(|r| r.test_name.as_str()).collect();
    assert_eq!(names, vec!["HEMOGLOBIN", "CRP", "HEMOGLOBIN"]);
    assert_eq!(results[2].value, "10.1");
}

#[test]
fn narrative_lines_are_collected() {
    let body = "HEMOGLOBIN: 9.0 g/dL L\nThe patient was advised that the levels seen in this panel mean Hemoglobin: 9 g/dL\n";
    let scan = extract_lab_results(body);
    assert_eq!(scan.results.len(), 1);
    assert_eq!(scan.narrative.len(), 1);
    assert!(scan.narrative[0].starts_with("The patient was advised"));
}

#[test]
fn leading_dot_value() {
    let r = result("CREATININE: .5 mg/dL");
    assert_eq!(r.value, ".5");
    assert_eq!(r.unit, "mg/dL");
    assert_eq!(r.flag, LabFlag::Normal);
}

#[test]
fn flag_glued_to_value() {
    let r = result("HEMOGLOBIN: 9.0L");
    assert_eq!(r.value, "9.0");
    assert_eq!(r.unit, NOT_AVAILABLE);
    assert_eq!(r.flag, LabFlag::Low);

    assert_eq!(result("CRP: 5.2H").flag, LabFlag::High);
}

#[test]
fn flag_before_unit_or_reference_text() {
    let r = result("HEMOGLOBIN: 9.0 L (13.0 - 17.0)");
    assert_eq!(r.unit, "(13.0 - 17.0)");
    assert_eq!(r.flag, LabFlag::Low);

    let r = result("HEMOGLOBIN: 9.0 L g/dL");
    assert_eq!(r.unit, "g/dL");
    assert_eq!(r.flag, LabFlag::Low);
}

#[test]
fn letters_starting_a_unit_are_not_flags() {
    let r = result("URINE CELLS: 3 HPF");
    assert_eq!(r.unit, "HPF");
    assert_eq!(r.flag, LabFlag::Normal);

    let r = result("FLOW: 4.5 L/min");
    assert_eq!(r.unit, "L/min");
    assert_eq!(r.flag, LabFlag::Normal);
}

#[test]
fn blank_test_name_is_discarded() {
    assert_eq!(scan_line("   : 5"), LineOutcome::NoMatch);
    assert!(extract_lab_results(" : 5 mg/dL\n\t: 7").results.is_empty());
}
