use std::sync::Arc;

use labrisk::ctx::Ctx;
use labrisk::io::summary::{format_record_summary, format_summary};
use labrisk::model::load_classifier;
use labrisk::pipeline::Pipeline;
use labrisk::reference::ReferenceTables;

const SAMPLE: &str = include_str!("data/sample.txt");

#[test]
fn run_summary_lines() {
    let pipeline = Pipeline::standard(
        load_classifier(None).unwrap(),
        Arc::new(ReferenceTables::builtin().unwrap()),
    );
    let mut ctx = Ctx::from_text("sample", SAMPLE);
    pipeline.run(&mut ctx).unwrap();

    let summary = format_summary(&ctx).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("labrisk v"));
    assert_eq!(lines[1], "Input: sample, 4 tests, 3 abnormal");
    assert_eq!(lines[2], "Risk: HIGH (ml=HIGH, reason=high cumulative severity)");
    assert_eq!(lines[3], "Confidence: LOW=0.32 MEDIUM=0.30 HIGH=0.38");
}

#[test]
fn record_summary_lists_tests() {
    let mut ctx = Ctx::from_text("sample", SAMPLE);
    Pipeline::extraction().run(&mut ctx).unwrap();

    let summary = format_record_summary(&ctx).unwrap();
    assert!(summary.starts_with("labrisk validate ok\nsections: 5\n"));
    assert!(summary.contains("patient: Mr. Saubhik Bhaumik\n"));
    assert!(summary.contains("tests: 4\n"));
    assert!(summary.contains("- CRP\t5.2\tmg/L\tHigh\n"));
}

#[test]
fn summary_requires_a_verdict() {
    let mut ctx = Ctx::from_text("sample", SAMPLE);
    Pipeline::extraction().run(&mut ctx).unwrap();
    assert!(format_summary(&ctx).is_err());
}
