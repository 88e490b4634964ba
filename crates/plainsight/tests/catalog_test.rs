//! Integration tests for the catalog API
//!
//! These tests exercise the catalog the way the documentation build consumes it.

use std::collections::HashSet;

use plainsight::{
    Artifact, Catalog, PlainsightError, diagram,
    draw::Drawable,
    theme::{GRUVBOX_PALETTE, Theme},
};

/// Every value of `attribute="..."` in `markup`.
fn attribute_values<'a>(markup: &'a str, attribute: &str) -> Vec<&'a str> {
    let needle = format!(" {attribute}=\"");
    markup
        .match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &markup[start + needle.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect()
}

#[test]
fn test_catalog_has_ten_distinct_artifacts() {
    let catalog = Catalog::build(Theme::gruvbox()).expect("Failed to build catalog");

    assert_eq!(catalog.len(), 10);
    let names: HashSet<_> = catalog.names().collect();
    assert_eq!(names.len(), 10);

    for (name, markup) in catalog.iter() {
        assert!(!markup.is_empty(), "{name} is empty");
        assert!(markup.contains("viewBox"), "{name} has no viewBox");
        assert!(markup.contains("</svg>"), "{name} is incomplete");
    }
}

#[test]
fn test_catalog_order() {
    let catalog = Catalog::build(Theme::gruvbox()).expect("Failed to build catalog");
    let names: Vec<_> = catalog.names().collect();
    let expected: Vec<_> = Artifact::ALL.iter().map(|a| a.name()).collect();
    assert_eq!(names, expected);
    assert_eq!(names.first(), Some(&"encryption_flow"));
    assert_eq!(names.last(), Some(&"quality_vs_capacity"));
}

#[test]
fn test_markup_uses_only_theme_colors() {
    let palette: HashSet<&str> = GRUVBOX_PALETTE.iter().map(|(_, hex)| *hex).collect();

    let catalog = Catalog::build(Theme::gruvbox()).expect("Failed to build catalog");
    for (name, markup) in catalog.iter() {
        for attribute in ["fill", "stroke"] {
            for value in attribute_values(markup, attribute) {
                assert!(
                    value == "none" || palette.contains(value),
                    "{name}: {attribute}=\"{value}\" is not a theme color"
                );
            }
        }
    }
}

#[test]
fn test_markup_carries_registry_hex_values() {
    let markup = Artifact::Keygen
        .render(Theme::gruvbox())
        .expect("Failed to render keygen");
    for hex in ["#3c3836", "#fabd2f", "#ebdbb2", "#8ec07c", "#b8bb26", "#d3869b"] {
        assert!(markup.contains(hex), "keygen is missing {hex}");
    }
    assert!(!markup.contains("rgb("));

    let chart = Artifact::MlkemPerformance
        .render(Theme::gruvbox())
        .expect("Failed to render chart");
    assert!(chart.contains(r##"fill="#1d2021""##));
}

#[test]
fn test_only_generic_monospace_font() {
    let catalog = Catalog::build(Theme::gruvbox()).expect("Failed to build catalog");
    for (name, markup) in catalog.iter() {
        for family in attribute_values(markup, "font-family") {
            assert_eq!(family, "monospace", "{name}");
        }
        assert!(!markup.contains("href"), "{name} references an external resource");
    }
}

#[test]
fn test_keygen_topology() {
    let scene = diagram::keygen();
    let captions: Vec<_> = scene.boxes().map(|b| b.text()).collect();
    assert_eq!(
        captions,
        ["RECEIVER", "ML-KEM keygen", "Public Key", "Private Key"]
    );

    let stage = scene.boxes().nth(1).unwrap().bounds();
    let fan_out: Vec<_> = scene
        .arrows()
        .filter(|a| a.from().x() == stage.max_x())
        .collect();
    assert_eq!(fan_out.len(), 2);

    let ids: HashSet<_> = scene.arrows().map(|a| a.marker_id().as_str()).collect();
    assert_eq!(ids.len(), scene.arrows().count());

    let markup = Artifact::Keygen
        .render(Theme::gruvbox())
        .expect("Failed to render keygen");
    assert!(markup.contains(r#"id="arrow1""#));
    assert!(markup.contains(r#"id="arrow2""#));
    assert!(markup.contains("url(#arrow2)"));
}

#[test]
fn test_rendering_is_idempotent() {
    let theme = Theme::gruvbox();
    let first = Catalog::build(theme).expect("Failed to build catalog");
    let second = Catalog::build(theme).expect("Failed to build catalog");
    assert_eq!(first, second);

    // Rendering in reverse order does not change any artifact
    let reversed = Catalog::build_only(theme, Artifact::ALL.into_iter().rev())
        .expect("Failed to build catalog");
    for (name, markup) in first.iter() {
        assert_eq!(reversed.get(name), Some(markup), "{name}");
    }
}

#[test]
fn test_marker_ids_restart_per_artifact() {
    let catalog = Catalog::build(Theme::gruvbox()).expect("Failed to build catalog");
    for (name, markup) in catalog.iter() {
        let ids = attribute_values(markup, "id");
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(distinct.len(), ids.len(), "{name} repeats a marker id");
        if let Some(first) = ids.first() {
            assert_eq!(*first, "arrow1", "{name}");
        }
    }
}

#[test]
fn test_unknown_artifact_name() {
    let err = "sequence_diagram".parse::<Artifact>().unwrap_err();
    assert!(matches!(err, PlainsightError::UnknownArtifact(name) if name == "sequence_diagram"));
}
