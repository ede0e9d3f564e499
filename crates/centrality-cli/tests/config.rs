//! Tests for weight configuration.

use std::fs;

use centrality_cli::config::{WeightOverrides, load_weights, resolve_weights};
use centrality_model::Weights;

#[test]
fn test_weights_file_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "importance": 2.0, "relevance": 0.5 }"#).unwrap();

    let weights = load_weights(&path).unwrap();

    insta::assert_json_snapshot!(weights, @r#"
    {
      "importance": 2.0,
      "frequency": 1.0,
      "relevance": 0.5
    }
    "#);
}

#[test]
fn test_overrides_take_precedence_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "importance": 2.0, "frequency": 3.0 }"#).unwrap();
    let overrides = WeightOverrides {
        importance: Some(5.0),
        ..WeightOverrides::default()
    };

    let weights = resolve_weights(Some(&path), overrides).unwrap();

    assert_eq!(weights, Weights::new(5.0, 3.0, 1.0));
}

#[test]
fn test_defaults_without_file() {
    let weights = resolve_weights(None, WeightOverrides::default()).unwrap();
    assert_eq!(weights, Weights::default());
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{ "importance": 2.0, "salary": 1.0 }"#).unwrap();

    assert!(load_weights(&path).is_err());
}

#[test]
fn test_non_positive_override_is_rejected() {
    let overrides = WeightOverrides {
        relevance: Some(0.0),
        ..WeightOverrides::default()
    };

    let error = resolve_weights(None, overrides).unwrap_err();

    assert!(format!("{error:#}").contains("relevance"));
}
