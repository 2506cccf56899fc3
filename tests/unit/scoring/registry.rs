//! Unit tests for registry resolution

use normatrix::models::input::{InputShape, RawValue};
use normatrix::models::score::Directionality;
use normatrix::scorers::{builtin_registry, IndicatorCategory};
use normatrix::scoring::error::ScoringError;
use normatrix::scoring::registry::ScorerRegistry;
use normatrix::scoring::scorer::IndicatorScorer;
use normatrix::scoring::transform::Transform;

fn sample_scorer(name: &str, low: f64, high: f64) -> IndicatorScorer {
    IndicatorScorer::new(
        name,
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::linear_threshold(low, high),
    )
    .unwrap()
}

#[test]
fn test_resolve_unknown_id_is_error() {
    let registry = ScorerRegistry::new();
    match registry.resolve("nope") {
        Err(ScoringError::UnknownIndicator(id)) => assert_eq!(id, "nope"),
        other => panic!("expected UnknownIndicator, got {other:?}"),
    }
}

#[test]
fn test_score_unknown_id_is_error() {
    let registry = ScorerRegistry::new();
    assert!(registry.score("nope", &RawValue::scalar(1.0)).is_err());
    assert!(registry.directionality("nope").is_err());
}

#[test]
fn test_register_and_resolve() {
    let mut registry = ScorerRegistry::new();
    registry.register(sample_scorer("osc", 30.0, 70.0));
    let scorer = registry.resolve("osc").unwrap();
    assert_eq!(scorer.name(), "osc");
    assert_eq!(registry.score("osc", &RawValue::scalar(50.0)).unwrap().value(), 50.0);
}

#[test]
fn test_register_replaces_previous() {
    let mut registry = ScorerRegistry::new();
    registry.register(sample_scorer("osc", 30.0, 70.0));
    registry.register(sample_scorer("osc", 20.0, 80.0));
    assert_eq!(registry.len(), 1);
    // The replacement's wider band makes 75 neutral.
    assert_eq!(registry.score("osc", &RawValue::scalar(75.0)).unwrap().value(), 50.0);
}

#[test]
fn test_two_instances_of_same_kind_keep_their_calibration() {
    let mut registry = ScorerRegistry::new();
    registry.register(sample_scorer("rsi_fast", 20.0, 80.0));
    registry.register(sample_scorer("rsi_slow", 30.0, 70.0));
    // 75 is inside the fast band but overbought for the slow one.
    assert_eq!(registry.score("rsi_fast", &RawValue::scalar(75.0)).unwrap().value(), 50.0);
    assert!(registry.score("rsi_slow", &RawValue::scalar(75.0)).unwrap().value() < 50.0);
}

#[test]
fn test_builtin_ids_all_resolve() {
    let registry = builtin_registry().unwrap();
    let expected = [
        "rsi",
        "stochastic",
        "cci",
        "macd_histogram",
        "roc",
        "cmf",
        "obv_slope",
        "relative_volume",
        "vwap_deviation",
        "order_imbalance",
        "depth_imbalance",
        "funding_rate",
        "long_short_ratio",
        "fear_greed",
        "social_sentiment",
        "support_resistance",
        "bollinger_position",
    ];
    assert_eq!(registry.len(), expected.len());
    for id in expected {
        assert!(registry.resolve(id).is_ok(), "missing builtin scorer {id}");
    }
}

#[test]
fn test_builtin_directionality() {
    let registry = builtin_registry().unwrap();
    assert_eq!(registry.directionality("rsi").unwrap(), Directionality::Inverted);
    assert_eq!(registry.directionality("funding_rate").unwrap(), Directionality::Inverted);
    assert_eq!(registry.directionality("support_resistance").unwrap(), Directionality::Inverted);
    assert_eq!(registry.directionality("cmf").unwrap(), Directionality::Direct);
    assert_eq!(registry.directionality("order_imbalance").unwrap(), Directionality::Direct);
    assert_eq!(registry.directionality("relative_volume").unwrap(), Directionality::Direct);
}
