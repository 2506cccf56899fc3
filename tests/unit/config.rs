//! Unit tests for calibration table loading

use pretty_assertions::assert_eq;

use normatrix::config::CalibrationTable;
use normatrix::models::input::{InputShape, RawValue};
use normatrix::models::score::Directionality;
use normatrix::scorers::builtin_registry;
use normatrix::scoring::error::ScoringError;

#[test]
fn test_table_builds_working_registry() {
    let json = r#"{
        "indicators": [
            {
                "id": "rsi",
                "category": "momentum",
                "direction": "inverted",
                "transform": {
                    "kind": "linear_threshold",
                    "low": 30.0,
                    "high": 70.0,
                    "slope_low": 1.25,
                    "slope_high": 1.25
                }
            },
            {
                "id": "order_imbalance",
                "category": "orderflow",
                "direction": "direct",
                "transform": { "kind": "ratio_to_range" }
            }
        ]
    }"#;

    let table = CalibrationTable::from_json(json).unwrap();
    let registry = table.build_registry().unwrap();
    assert_eq!(registry.len(), 2);

    // Matches the equivalent built-in construction.
    let builtin = builtin_registry().unwrap();
    for raw in [15.0, 30.0, 55.0, 70.0, 85.0] {
        assert_eq!(
            registry.score("rsi", &RawValue::scalar(raw)).unwrap(),
            builtin.score("rsi", &RawValue::scalar(raw)).unwrap(),
        );
    }
    assert_eq!(
        registry
            .score("order_imbalance", &RawValue::scalar(0.4))
            .unwrap()
            .value(),
        70.0
    );
}

#[test]
fn test_table_entry_defaults() {
    let json = r#"{
        "indicators": [
            {
                "id": "sentiment",
                "category": "sentiment",
                "direction": "direct",
                "transform": { "kind": "ratio_to_range" }
            }
        ]
    }"#;

    let table = CalibrationTable::from_json(json).unwrap();
    let entry = &table.indicators[0];
    assert_eq!(entry.shape, InputShape::Scalar);

    let registry = table.build_registry().unwrap();
    assert_eq!(registry.directionality("sentiment").unwrap(), Directionality::Direct);
    // Domain defaults to [-1, 1].
    assert_eq!(registry.score("sentiment", &RawValue::scalar(-1.0)).unwrap().value(), 0.0);
    assert_eq!(registry.score("sentiment", &RawValue::scalar(1.0)).unwrap().value(), 100.0);
}

#[test]
fn test_degenerate_entry_rejected_at_build() {
    let json = r#"{
        "indicators": [
            {
                "id": "broken",
                "category": "momentum",
                "direction": "inverted",
                "transform": {
                    "kind": "linear_threshold",
                    "low": 70.0,
                    "high": 70.0,
                    "slope_low": 1.25,
                    "slope_high": 1.25
                }
            }
        ]
    }"#;

    let table = CalibrationTable::from_json(json).unwrap();
    match table.build_registry() {
        Err(ScoringError::DegenerateCalibration { indicator, .. }) => {
            assert_eq!(indicator, "broken");
        }
        other => panic!("expected DegenerateCalibration, got {other:?}"),
    }
}

#[test]
fn test_levels_shape_from_table() {
    let json = r#"{
        "indicators": [
            {
                "id": "sr",
                "category": "structure",
                "shape": "levels",
                "direction": "inverted",
                "transform": { "kind": "ratio_to_range", "domain_low": 0.0, "domain_high": 1.0 }
            }
        ]
    }"#;

    let registry = CalibrationTable::from_json(json)
        .unwrap()
        .build_registry()
        .unwrap();
    let score = registry
        .score("sr", &RawValue::levels(105.0, Some(100.0), Some(110.0)))
        .unwrap();
    assert_eq!(score.value(), 50.0);
}

#[test]
fn test_environment_defaults_to_sandbox() {
    if std::env::var("ENVIRONMENT").is_err() {
        assert_eq!(normatrix::config::get_environment(), "sandbox");
    }
}
