//! Tests for CSS class composition.

use oxide_bootstrap_core::{compose, Margin, Size, StyleOptions, ValidationState, Variant};

#[test]
fn danger_small_button() {
    let opts = StyleOptions::new().variant(Variant::Danger).size(Size::Small);
    assert_eq!(compose(&opts, "btn"), "btn btn-danger btn-sm");
}

#[test]
fn compose_is_idempotent() {
    let opts = StyleOptions::new()
        .outline(Variant::Info)
        .size(Size::Large)
        .margin(Margin::Auto)
        .validation(ValidationState::Valid);
    assert_eq!(compose(&opts, "btn"), compose(&opts, "btn"));
    assert_eq!(
        compose(&opts, "btn"),
        "btn btn-outline-info btn-lg mb-auto is-valid"
    );
}

#[test]
fn every_variant_maps_to_suffix() {
    for variant in Variant::ALL {
        let opts = StyleOptions::new().variant(variant);
        assert_eq!(compose(&opts, "alert"), format!("alert alert-{variant}"));
    }
}

#[test]
fn default_fallback_never_contains_dollar() {
    let classes = compose(&StyleOptions::default(), "btn");
    assert!(!classes.contains('$'));
    assert_eq!(classes, "btn btn-primary");
}

#[test]
fn no_duplicate_tokens() {
    let opts = StyleOptions::new().variant(Variant::Primary);
    let classes = compose(&opts, "btn btn-primary");
    let tokens: Vec<&str> = classes.split(' ').collect();
    let mut unique = tokens.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(tokens.len(), unique.len());
}

#[test]
fn options_from_json() {
    let opts: StyleOptions =
        serde_json::from_str(r#"{"variant": "dark", "size": "small", "margin": "2"}"#).unwrap();
    assert_eq!(compose(&opts, "btn"), "btn btn-dark btn-sm mb-2");
}
