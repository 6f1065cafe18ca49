use std::sync::LazyLock;

use regex::Regex;

/// Sentinel stored for any field whose source text is missing.
pub const NOT_AVAILABLE: &str = "N/A";

// `[cite: 3]`, `[source: 3]` and the `[source:: 3]` form some OCR passes emit.
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:cite|source:?):\s*\d+\]").expect("valid regex"));

/// Strip citation artifacts and brackets, then collapse whitespace.
///
/// Absent or blank input, and input that is blank once cleaned, becomes
/// [`NOT_AVAILABLE`]. Cleaning is idempotent.
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return NOT_AVAILABLE.to_string();
    };
    let without_citations = CITATION_RE.replace_all(text, "");
    let without_brackets = without_citations.replace(['[', ']'], "");
    let collapsed = without_brackets.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        collapsed
    }
}

/// Shorthand for cleaning text that is known to be present.
pub fn clean(text: &str) -> String {
    clean_text(Some(text))
}
