use super::*;

fn derive(raw: &str) -> String {
    derive_nav_title(raw, &ChromeConfig::default())
}

#[test]
fn suffix_is_stripped() {
    assert_eq!(derive("Imports by Country - US Trade Data"), "Imports by Country");
}

#[test]
fn plotly_becomes_chart() {
    assert_eq!(derive("Trends plotly"), "Trends Chart");
}

#[test]
fn both_rules_apply_together() {
    assert_eq!(derive("Tariffs plotly - US Trade Data"), "Tariffs Chart");
}

#[test]
fn only_first_occurrence_is_rewritten() {
    assert_eq!(derive("plotly vs plotly"), "Chart vs plotly");
}

#[test]
fn unmatched_title_passes_through() {
    assert_eq!(derive("Monthly Balance"), "Monthly Balance");
}

#[test]
fn empty_title_uses_default() {
    assert_eq!(derive(""), "Visualization");
}

#[test]
fn title_that_is_only_the_suffix_becomes_empty() {
    assert_eq!(derive(" - US Trade Data"), "");
}

#[test]
fn home_paths_are_detected() {
    assert!(is_home_path("/index.html", "index.html"));
    assert!(is_home_path("/viz/index.html", "index.html"));
    assert!(is_home_path("/", "index.html"));
    assert!(is_home_path("/viz/", "index.html"));
}

#[test]
fn chart_pages_are_not_home() {
    assert!(!is_home_path("/imports_by_country.html", "index.html"));
    assert!(!is_home_path("/index.html.bak", "index.html"));
    assert!(!is_home_path("", "index.html"));
}
