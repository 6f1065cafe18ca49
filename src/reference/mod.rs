mod loader;

use std::path::Path;

use anyhow::Result;

pub use loader::{
    load_abbreviations_tsv, load_builtin_abbreviations_v1, load_builtin_ranges_v1,
    load_ranges_tsv, merge_abbreviations, merge_ranges,
};

/// Inclusive clinical reference range for one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDef {
    pub marker: String,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRanges {
    pub version: String,
    pub defs: Vec<RangeDef>,
}

impl ReferenceRanges {
    pub fn new(version: &str, defs: Vec<RangeDef>) -> Self {
        Self {
            version: version.to_string(),
            defs,
        }
    }

    pub fn get(&self, marker: &str) -> Option<&RangeDef> {
        self.defs.iter().find(|d| d.marker == marker)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviation {
    pub token: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviations {
    pub version: String,
    pub entries: Vec<Abbreviation>,
}

impl Abbreviations {
    pub fn new(version: &str, entries: Vec<Abbreviation>) -> Self {
        Self {
            version: version.to_string(),
            entries,
        }
    }

    pub fn explain(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.token == token)
            .map(|a| a.explanation.as_str())
    }
}

/// Read-only lookup tables shared by every report in a run.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub ranges: ReferenceRanges,
    pub abbreviations: Abbreviations,
}

impl ReferenceTables {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            ranges: ReferenceRanges::new("v1", load_builtin_ranges_v1()?),
            abbreviations: Abbreviations::new("v1", load_builtin_abbreviations_v1()?),
        })
    }

    /// Built-in tables with optional user TSVs overlaid per key.
    pub fn load(ranges_path: Option<&Path>, abbreviations_path: Option<&Path>) -> Result<Self> {
        let mut tables = Self::builtin()?;
        if let Some(path) = ranges_path {
            let user = load_ranges_tsv(path)?;
            tables.ranges.defs = merge_ranges(tables.ranges.defs, user);
        }
        if let Some(path) = abbreviations_path {
            let user = load_abbreviations_tsv(path)?;
            tables.abbreviations.entries = merge_abbreviations(tables.abbreviations.entries, user);
        }
        Ok(tables)
    }
}
