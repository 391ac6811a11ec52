use super::*;

#[test]
fn left_zone_links_home_and_shows_title() {
    let nav = build_nav_bar(&ChromeConfig::default(), Some("Imports by Country"));
    assert_eq!(nav.left.home_href, "index.html");
    assert_eq!(nav.left.home_label, "🏠 Dashboard");
    assert_eq!(nav.left.title, "Imports by Country");
}

#[test]
fn missing_or_empty_title_uses_default() {
    let cfg = ChromeConfig::default();
    assert_eq!(build_nav_bar(&cfg, None).left.title, "Visualization");
    assert_eq!(build_nav_bar(&cfg, Some("")).left.title, "Visualization");
}

#[test]
fn toggle_starts_as_moon_without_tooltip() {
    let nav = build_nav_bar(&ChromeConfig::default(), None);
    assert_eq!(nav.right.toggle, ToggleFace { glyph: "🌙".into(), tooltip: None });
}

#[test]
fn home_target_follows_config() {
    let cfg = ChromeConfig { home_url: "dashboard.html".into(), ..ChromeConfig::default() };
    assert_eq!(build_nav_bar(&cfg, None).left.home_href, "dashboard.html");
}

#[test]
fn face_for_theme_carries_tooltip() {
    let face = ToggleFace::for_theme(Theme::Dark);
    assert_eq!(face.glyph, "☀️");
    assert_eq!(face.tooltip.as_deref(), Some("Switch to Light Mode"));
}
