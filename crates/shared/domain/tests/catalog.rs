use atelier_domain::catalog::{doll_sizes, measurement_tips, sizing_notes};
use atelier_domain::IconName;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn datasets_have_expected_sizes() {
    assert_eq!(doll_sizes().len(), 6);
    assert_eq!(measurement_tips().len(), 3);
    assert_eq!(sizing_notes().len(), 3);
}

#[test]
fn doll_names_and_slugs_are_unique() {
    let names: HashSet<_> = doll_sizes().iter().map(|s| s.name).collect();
    let slugs: HashSet<_> = doll_sizes().iter().map(|s| s.slug()).collect();
    assert_eq!(names.len(), doll_sizes().len());
    assert_eq!(slugs.len(), doll_sizes().len());
}

#[test]
fn every_doll_has_distinct_non_empty_measurements() {
    for size in doll_sizes() {
        assert!(!size.measurements.is_empty(), "{} has no measurements", size.name);
        assert!(!size.description.is_empty());

        let labels: HashSet<_> = size.measurements.iter().map(|m| m.label).collect();
        assert_eq!(labels.len(), size.measurements.len(), "duplicate label in {}", size.name);
        assert!(size.measurements.iter().all(|m| !m.label.is_empty() && !m.value.is_empty()));
    }
}

#[test]
fn tips_and_notes_are_filled_in() {
    let icons: Vec<_> = measurement_tips().iter().map(|t| t.icon).collect();
    assert_eq!(icons, [IconName::Ruler, IconName::Shirt, IconName::Info]);

    for tip in measurement_tips() {
        assert!(!tip.title.is_empty() && !tip.description.is_empty());
    }
    for note in sizing_notes() {
        assert!(!note.title.is_empty() && !note.content.is_empty());
    }
}

#[test]
fn catalog_exports_with_stable_field_names() {
    let tip = serde_json::to_value(measurement_tips()[0]).expect("serialize tip");
    assert_eq!(tip["icon"], json!("ruler"));
    assert_eq!(tip["title"], json!("Use a Flexible Tape"));

    let size = serde_json::to_value(doll_sizes()[0]).expect("serialize size");
    assert_eq!(size["name"], json!("Classic Fashion Doll"));
    assert_eq!(size["measurements"][0], json!({ "label": "Height", "value": "11.5 in (29 cm)" }));

    let note = serde_json::to_value(sizing_notes()[0]).expect("serialize note");
    assert!(note["content"].is_string());
}
