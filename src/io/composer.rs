use std::collections::BTreeSet;

use crate::reference::Abbreviations;
use crate::scores::{NormalizedLabs, RiskVerdict};

const RULE: &str = "----------------------------------------";

pub const NO_FINDINGS: &str = "No abnormal findings detected.";
pub const NO_ABBREVIATIONS: &str = "No medical abbreviations to explain.";

/// "platelet_count" -> "PLATELET COUNT".
pub fn pretty_marker(marker: &str) -> String {
    marker.replace('_', " ").to_uppercase()
}

/// Render the four-block human-readable report.
pub fn compose_report(
    labs: &NormalizedLabs,
    verdict: &RiskVerdict,
    abbreviations: &Abbreviations,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut used_tokens: BTreeSet<String> = BTreeSet::new();

    push_header(&mut lines, "Pathology Observations", false);
    for obs in &labs.observations {
        let label = pretty_marker(&obs.marker);
        note_token(&mut used_tokens, &label);
        lines.push(format!(
            "- {} → {} ({})",
            label,
            obs.display,
            obs.status.as_str()
        ));
    }

    push_header(&mut lines, "Abnormal Findings", true);
    if labs.abnormal_findings.is_empty() {
        lines.push(NO_FINDINGS.to_string());
    } else {
        for finding in &labs.abnormal_findings {
            let label = pretty_marker(&finding.marker);
            note_token(&mut used_tokens, &label);
            lines.push(format!(
                "• {} - {} ({})",
                label,
                finding.display,
                finding.status.as_str()
            ));
        }
    }

    push_header(&mut lines, "Medical Term Explanations", true);
    let explained: Vec<String> = used_tokens
        .iter()
        .filter_map(|token| {
            abbreviations
                .explain(token)
                .map(|text| format!("{:<8} : {}", token, text))
        })
        .collect();
    if explained.is_empty() {
        lines.push(NO_ABBREVIATIONS.to_string());
    } else {
        lines.extend(explained);
    }

    push_header(&mut lines, "Final Health Assessment", true);
    lines.push(verdict.final_risk.as_str().to_string());

    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, title: &str, spaced: bool) {
    if spaced {
        lines.push(String::new());
    }
    lines.push(title.to_string());
    lines.push(RULE.to_string());
}

fn note_token(tokens: &mut BTreeSet<String>, label: &str) {
    if let Some(first) = label.split_whitespace().next() {
        tokens.insert(first.to_string());
    }
}
