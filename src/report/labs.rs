use std::sync::LazyLock;

use regex::Regex;

use crate::report::clean::clean;
use crate::report::{LabFlag, LabTestResult};

/// Test names longer than this are prose that happens to contain a colon.
pub const MAX_TEST_NAME_WORDS: usize = 10;

static LAB_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<name>[\w\s%()\-]+):\s*",
        r"(?i:(?P<value>measuring [\d.\sx]+cm|patchy positivity|positive|negative|\d+(?:\.\d+)?|\.\d+))",
        r"(?:\s*(?P<lead>[HL])(?:\s+|$))?",
        r"(?P<qual>.*?)",
        r"(?:\s+(?P<flag>[HL]))?\s*$",
    ))
    .expect("valid regex")
});

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Result(LabTestResult),
    /// Matched the pattern but the test name reads as a sentence.
    Narrative,
    NoMatch,
}

pub fn scan_line(line: &str) -> LineOutcome {
    let Some(caps) = LAB_LINE_RE.captures(line) else {
        return LineOutcome::NoMatch;
    };
    let test_name = caps.name("name").map(|m| m.as_str().trim()).unwrap_or("");
    if test_name.is_empty() {
        return LineOutcome::NoMatch;
    }
    if test_name.split_whitespace().count() > MAX_TEST_NAME_WORDS {
        return LineOutcome::Narrative;
    }
    let value = caps.name("value").map(|m| m.as_str().trim()).unwrap_or("");
    let unit = caps.name("qual").map(|m| m.as_str()).unwrap_or("");
    // A flag may sit right after the value ("9.0L", "9.0 L (13 - 17)") or
    // close the line after the unit ("9.0 g/dL L").
    let flag = match caps
        .name("lead")
        .or_else(|| caps.name("flag"))
        .map(|m| m.as_str())
    {
        Some("H") => LabFlag::High,
        Some("L") => LabFlag::Low,
        _ => LabFlag::Normal,
    };
    LineOutcome::Result(LabTestResult {
        test_name: test_name.to_string(),
        value: value.to_string(),
        unit: clean(unit),
        flag,
    })
}

/// Lab results of one TESTS_AND_VALUES body, in source order, plus the
/// lines skipped as narrative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabScan {
    pub results: Vec<LabTestResult>,
    pub narrative: Vec<String>,
}

pub fn extract_lab_results(body: &str) -> LabScan {
    let mut scan = LabScan::default();
    for line in body.lines() {
        match scan_line(line) {
            LineOutcome::Result(result) => scan.results.push(result),
            LineOutcome::Narrative => scan.narrative.push(line.trim().to_string()),
            LineOutcome::NoMatch => {}
        }
    }
    scan
}
