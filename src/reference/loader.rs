use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::reference::{Abbreviation, RangeDef};

pub fn load_builtin_ranges_v1() -> Result<Vec<RangeDef>> {
    let content = include_str!("../../assets/reference/ranges_v1.tsv");
    parse_ranges_tsv(content, "built-in ranges v1")
}

pub fn load_builtin_abbreviations_v1() -> Result<Vec<Abbreviation>> {
    let content = include_str!("../../assets/reference/abbreviations_v1.tsv");
    parse_abbreviations_tsv(content, "built-in abbreviations v1")
}

pub fn load_ranges_tsv(path: &Path) -> Result<Vec<RangeDef>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read reference range TSV {}", path.display()))?;
    parse_ranges_tsv(&content, &path.display().to_string())
}

pub fn load_abbreviations_tsv(path: &Path) -> Result<Vec<Abbreviation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read abbreviation TSV {}", path.display()))?;
    parse_abbreviations_tsv(&content, &path.display().to_string())
}

pub fn merge_ranges(builtin: Vec<RangeDef>, user: Vec<RangeDef>) -> Vec<RangeDef> {
    merge_by_key(builtin, user, |d| d.marker.clone())
}

pub fn merge_abbreviations(builtin: Vec<Abbreviation>, user: Vec<Abbreviation>) -> Vec<Abbreviation> {
    merge_by_key(builtin, user, |a| a.token.clone())
}

// User entries replace built-ins in place; new keys go last in file order.
fn merge_by_key<T, F>(builtin: Vec<T>, user: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    if user.is_empty() {
        return builtin;
    }
    let mut user_order = Vec::with_capacity(user.len());
    let mut user_map: HashMap<String, T> = HashMap::new();
    for item in user {
        let k = key(&item);
        user_order.push(k.clone());
        user_map.insert(k, item);
    }

    let mut merged = Vec::with_capacity(builtin.len() + user_map.len());
    for item in builtin {
        match user_map.remove(&key(&item)) {
            Some(user_item) => merged.push(user_item),
            None => merged.push(item),
        }
    }
    for k in user_order {
        if let Some(item) = user_map.remove(&k) {
            merged.push(item);
        }
    }
    merged
}

fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_ranges_tsv(content: &str, source: &str) -> Result<Vec<RangeDef>> {
    let mut seen = HashSet::new();
    let mut defs = Vec::new();
    for (line_no, line) in data_lines(content) {
        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();
        if parts.len() != 3 {
            bail!("{}:{} malformed TSV (expected 3 columns)", source, line_no);
        }
        let marker = parts[0];
        if marker.is_empty() {
            bail!("{}:{} empty marker in TSV", source, line_no);
        }
        let lower: f64 = parts[1]
            .parse()
            .with_context(|| format!("{}:{} invalid lower bound '{}'", source, line_no, parts[1]))?;
        let upper: f64 = parts[2]
            .parse()
            .with_context(|| format!("{}:{} invalid upper bound '{}'", source, line_no, parts[2]))?;
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            bail!(
                "{}:{} invalid range for '{}' ({} .. {})",
                source,
                line_no,
                marker,
                lower,
                upper
            );
        }
        if !seen.insert(marker.to_string()) {
            bail!("{}:{} duplicate marker '{}'", source, line_no, marker);
        }
        defs.push(RangeDef {
            marker: marker.to_string(),
            lower,
            upper,
        });
    }
    Ok(defs)
}

fn parse_abbreviations_tsv(content: &str, source: &str) -> Result<Vec<Abbreviation>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (line_no, line) in data_lines(content) {
        let Some((token, explanation)) = line.split_once('\t') else {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        };
        let token = token.trim();
        let explanation = explanation.trim();
        if token.is_empty() || explanation.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        if !seen.insert(token.to_string()) {
            bail!("{}:{} duplicate token '{}'", source, line_no, token);
        }
        entries.push(Abbreviation {
            token: token.to_string(),
            explanation: explanation.to_string(),
        });
    }
    Ok(entries)
}
