use labrisk::report::{NOT_AVAILABLE, clean, clean_text};

#[test]
fn strips_citation_markers() {
    assert_eq!(clean("Anemia noted [cite: 2]."), "Anemia noted .");
    assert_eq!(clean("Result [source: 14] pending"), "Result pending");
    assert_eq!(clean("Result [source:: 3] pending"), "Result pending");
}

#[test]
fn strips_remaining_brackets() {
    assert_eq!(clean("[Signature present]"), "Signature present");
}

#[test]
fn collapses_whitespace_and_newlines() {
    assert_eq!(clean("  12 Main St\n\n  Springfield \t IL  "), "12 Main St Springfield IL");
}

#[test]
fn absent_and_blank_map_to_sentinel() {
    assert_eq!(clean_text(None), NOT_AVAILABLE);
    assert_eq!(clean(""), NOT_AVAILABLE);
    assert_eq!(clean("   \n "), NOT_AVAILABLE);
    assert_eq!(clean("[cite: 1]"), NOT_AVAILABLE);
}

#[test]
fn cleaning_is_idempotent() {
    let samples = [
        "Anemia noted [cite: 2].",
        "[[cite: 1]cite: 2]",
        "  a\n b  c ",
        "",
        "N/A",
        "Dr. A. K. Asthana [source: 3] (MBBS)",
    ];
    for s in samples {
        let once = clean(s);
        assert_eq!(clean(&once), once, "not idempotent for {:?}", s);
    }
}
