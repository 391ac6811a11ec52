use super::*;

#[test]
fn only_literal_true_reads_as_dark() {
    assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("false")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("TRUE")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("1")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn stored_form_matches_parse() {
    assert_eq!(Theme::from_stored(Some(Theme::Dark.as_stored())), Theme::Dark);
    assert_eq!(Theme::from_stored(Some(Theme::Light.as_stored())), Theme::Light);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn dark_shows_sun_and_light_label() {
    assert_eq!(Theme::Dark.toggle_glyph(), "☀️");
    assert_eq!(Theme::Dark.toggle_tooltip(), "Switch to Light Mode");
}

#[test]
fn light_shows_moon_and_dark_label() {
    assert_eq!(Theme::Light.toggle_glyph(), "🌙");
    assert_eq!(Theme::Light.toggle_tooltip(), "Switch to Dark Mode");
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
    assert!(Theme::from_dark(true).is_dark());
}
