use serde_json::json;

use super::*;

#[test]
fn defaults_match_fixed_identifiers() {
    let cfg = ChromeConfig::default();
    assert_eq!(cfg.storage_key, "tradeVizDarkMode");
    assert_eq!(cfg.home_url, "index.html");
    assert_eq!(cfg.default_title, "Visualization");
    assert_eq!(cfg.nav_offset, "70px");
    assert_eq!(cfg.marker, ThemeMarker::Class { name: "dark-mode".into() });
}

#[test]
fn empty_object_decodes_to_defaults() {
    let cfg: ChromeConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, ChromeConfig::default());
}

#[test]
fn partial_object_overrides_only_named_keys() {
    let cfg: ChromeConfig = serde_json::from_value(json!({
        "storageKey": "otherKey",
        "navOffset": "56px",
    }))
    .unwrap();
    assert_eq!(cfg.storage_key, "otherKey");
    assert_eq!(cfg.nav_offset, "56px");
    assert_eq!(cfg.home_url, "index.html");
    assert_eq!(cfg.title_suffix, " - US Trade Data");
}

#[test]
fn attribute_marker_decodes() {
    let cfg: ChromeConfig = serde_json::from_value(json!({
        "marker": { "kind": "attribute", "name": "data-theme", "value": "dark" }
    }))
    .unwrap();
    assert_eq!(cfg.marker, ThemeMarker::Attribute { name: "data-theme".into(), value: "dark".into() });
}

#[test]
fn unknown_marker_kind_is_rejected() {
    let result: Result<ChromeConfig, _> = serde_json::from_value(json!({
        "marker": { "kind": "style", "name": "x" }
    }));
    assert!(result.is_err());
}
