use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    UserInfo,
    LabInfo,
    TestsAndValues,
    RemarksAndResults,
    DoctorInfo,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::UserInfo,
        Section::LabInfo,
        Section::TestsAndValues,
        Section::RemarksAndResults,
        Section::DoctorInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::UserInfo => "USER_INFO",
            Section::LabInfo => "LAB_INFO",
            Section::TestsAndValues => "TESTS_AND_VALUES",
            Section::RemarksAndResults => "REMARKS_AND_RESULTS",
            Section::DoctorInfo => "DOCTOR_INFO",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == name)
    }
}

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(USER_INFO|LAB_INFO|TESTS_AND_VALUES|REMARKS_AND_RESULTS|DOCTOR_INFO)\]")
        .expect("valid regex")
});

/// Section bodies keyed by header, iterated in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    bodies: BTreeMap<Section, String>,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.bodies.get(&section).map(String::as_str)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.bodies.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.bodies.iter().map(|(s, b)| (*s, b.as_str()))
    }
}

/// Split raw report text on the bracketed section headers.
///
/// Text before the first header is dropped. When a header repeats, the body
/// of its last occurrence replaces the earlier one.
pub fn segment(raw: &str) -> SectionMap {
    let headers: Vec<(Section, usize, usize)> = HEADER_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let section = Section::from_name(caps.get(1)?.as_str())?;
            Some((section, whole.start(), whole.end()))
        })
        .collect();

    let mut bodies = BTreeMap::new();
    for (idx, &(section, _, body_start)) in headers.iter().enumerate() {
        let body_end = headers
            .get(idx + 1)
            .map(|&(_, next_start, _)| next_start)
            .unwrap_or(raw.len());
        bodies.insert(section, raw[body_start..body_end].trim().to_string());
    }
    SectionMap { bodies }
}
