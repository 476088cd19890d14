//! Logging to the javascript console.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// There is no environment in the browser, so the filter is fixed.
const LOG_FILTER: &str = "error,ui=debug,payloads=debug";

/// Route `tracing` events to the browser console.
pub fn init_logging() {
    match try_init_logging() {
        Ok(()) => tracing::info!(
            "Initialized logs, jokes from {}",
            payloads::JOKE_API_ADDRESS
        ),
        Err(e) => tracing::warn!("Console logging already set up: {e}"),
    }
}

fn try_init_logging() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(fmt_layer)
        .try_init()
}
