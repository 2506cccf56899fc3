use normatrix::config;
use normatrix::logging::init_logging;
use normatrix::models::input::RawValue;
use normatrix::scorers::builtin_registry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_env();
    init_logging();

    let registry = builtin_registry()?;

    let samples = [
        ("rsi", RawValue::scalar(24.0)),
        ("rsi", RawValue::scalar(82.0)),
        ("macd_histogram", RawValue::scalar(0.35)),
        ("funding_rate", RawValue::scalar(-0.0003)),
        ("order_imbalance", RawValue::scalar(0.4)),
        ("relative_volume", RawValue::scalar(2.4)),
        (
            "support_resistance",
            RawValue::levels(45_000.0, Some(44_200.0), Some(46_800.0)),
        ),
        // Malformed on purpose: scores neutral instead of failing.
        ("cmf", RawValue::scalar(f64::NAN)),
    ];

    for (id, input) in &samples {
        let scored = registry.score_detailed(id, input)?;
        let direction = registry.directionality(id)?;
        println!(
            "{:<20} -> {:6.2}  ({:?}, {:?})",
            id,
            scored.score.value(),
            direction,
            scored.outcome
        );
    }

    Ok(())
}
