//! Logging initialization for hosts embedding the scoring library.
//!
//! Fallback paths inside the scorers log at debug (bad input) and warn
//! (failed computation); this module wires those events to an
//! environment-appropriate subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::get_environment;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Production environments get structured JSON lines for log aggregation;
/// everything else gets a human-readable ANSI format.
pub fn init_logging() {
    let base = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    match get_environment().as_str() {
        "production" | "prod" => {
            tracing_subscriber::registry()
                .with(default_filter())
                .with(base.json().with_writer(std::io::stdout))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(default_filter())
                .with(base.with_ansi(true).with_writer(std::io::stdout))
                .init();
        }
    }
}
