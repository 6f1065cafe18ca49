use labrisk::report::fields::{Capture, FieldSpec};
use labrisk::report::{FieldExtractor, FieldKey, NOT_AVAILABLE, Section, segment};

fn extract(text: &str) -> labrisk::report::ExtractedFields {
    FieldExtractor::standard().extract(&segment(text))
}

#[test]
fn patient_fields_from_user_info() {
    let fields = extract(
        "[USER_INFO]\nPatient Name: Mr. Saubhik Bhaumik\nAge: 28 YRS\nGender: M\nPatient ID: 1015\nAddress: 12 Main St [cite: 1]\n",
    );
    assert_eq!(fields.get(FieldKey::PatientName), "Mr. Saubhik Bhaumik");
    assert_eq!(fields.get(FieldKey::PatientAge), "28 YRS");
    assert_eq!(fields.get(FieldKey::PatientGender), "M");
    assert_eq!(fields.get(FieldKey::PatientId), "1015");
    assert_eq!(fields.get(FieldKey::PatientAddress), "12 Main St");
}

#[test]
fn gender_captures_a_single_word() {
    let fields = extract("[USER_INFO]\nGender: Female (self reported)\n");
    assert_eq!(fields.get(FieldKey::PatientGender), "Female");
}

#[test]
fn capture_stops_at_end_of_line() {
    let fields = extract("[USER_INFO]\nPatient Name: Jane Roe\nAge: 41\n");
    assert_eq!(fields.get(FieldKey::PatientName), "Jane Roe");
}

#[test]
fn missing_labels_default() {
    let fields = extract("[USER_INFO]\nPatient Name: Jane Roe\n");
    assert_eq!(fields.get(FieldKey::PatientAge), NOT_AVAILABLE);
    assert_eq!(fields.get(FieldKey::LabName), NOT_AVAILABLE);
    assert_eq!(fields.get(FieldKey::ReferredBy), NOT_AVAILABLE);
}

#[test]
fn labels_are_scoped_to_their_section() {
    // Address under LAB_INFO must not leak into the patient address.
    let fields = extract("[USER_INFO]\nPatient Name: A\n[LAB_INFO]\nAddress: Central, Hong Kong\n");
    assert_eq!(fields.get(FieldKey::PatientAddress), NOT_AVAILABLE);
    assert_eq!(fields.get(FieldKey::LabAddress), "Central, Hong Kong");
}

#[test]
fn lab_fields_from_lab_info() {
    let fields = extract(
        "[LAB_INFO]\nClinic/Laboratory Name: Labsmart Diagnostics\nTel: +91 12345 67890\nWebsite: www.labsmart.in\n",
    );
    assert_eq!(fields.get(FieldKey::LabName), "Labsmart Diagnostics");
    assert_eq!(fields.get(FieldKey::LabPhone), "+91 12345 67890");
    assert_eq!(fields.get(FieldKey::LabWebsite), "www.labsmart.in");

    let plain = extract("[LAB_INFO]\nLaboratory Name: Innovative Diagnostic\n");
    assert_eq!(plain.get(FieldKey::LabName), "Innovative Diagnostic");
}

#[test]
fn doctor_label_variants() {
    let upper = extract("[DOCTOR_INFO]\nDoctor's Name: Dr. A. K. Asthana\nSpecialization: MD Pathologist\nReferred by: Dr. Sachin Patil (MBBS)\n");
    assert_eq!(upper.get(FieldKey::PrimaryDoctor), "Dr. A. K. Asthana");
    assert_eq!(upper.get(FieldKey::Specialization), "MD Pathologist");
    assert_eq!(upper.get(FieldKey::ReferredBy), "Dr. Sachin Patil (MBBS)");

    let lower = extract("[DOCTOR_INFO]\nDoctor's name: Dr. B\n");
    assert_eq!(lower.get(FieldKey::PrimaryDoctor), "Dr. B");

    // Detected, but the label token itself is matched case-sensitively.
    let shouted = extract("[DOCTOR_INFO]\nDOCTOR'S NAME: Dr. C\n");
    assert_eq!(shouted.get(FieldKey::PrimaryDoctor), NOT_AVAILABLE);
}

#[test]
fn custom_schema_composes_independent_fields() {
    let specs = [FieldSpec {
        key: FieldKey::Specialization,
        section: Section::RemarksAndResults,
        labels: &["Impression"],
        capture: Capture::RestOfLine,
        guard: None,
    }];
    let extractor = FieldExtractor::new(&specs).unwrap();
    let fields = extractor.extract(&segment("[REMARKS_AND_RESULTS]\nImpression: iron deficiency\n"));
    assert_eq!(fields.get(FieldKey::Specialization), "iron deficiency");
    assert_eq!(fields.get(FieldKey::PatientName), NOT_AVAILABLE);
}

#[test]
fn record_assembles_fields_and_labs() {
    use labrisk::report::{ClinicalRecord, LabFlag, extract_lab_results};

    let sections = segment(
        "[USER_INFO]\nPatient Name: Ann Lee\n[TESTS_AND_VALUES]\nCRP: 5.2 mg/L H\n[REMARKS_AND_RESULTS]\n[source: 4] Follow up\n",
    );
    let fields = FieldExtractor::standard().extract(&sections);
    let labs = extract_lab_results(sections.get(Section::TestsAndValues).unwrap());
    let record = ClinicalRecord::assemble(&fields, labs.results, &sections);
    assert_eq!(record.patient.name, "Ann Lee");
    assert_eq!(record.patient.age, NOT_AVAILABLE);
    assert_eq!(record.lab.name, NOT_AVAILABLE);
    assert_eq!(record.test_results.len(), 1);
    assert_eq!(record.test_results[0].flag, LabFlag::High);
    assert_eq!(record.remarks, "Follow up");
    assert_eq!(record.personnel.referred_by, NOT_AVAILABLE);
}
