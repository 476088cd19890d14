use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Subscriber for tests. `RUST_LOG` overrides `default_filter`; output goes
/// through the libtest writer so it is only shown for failing tests.
pub fn get_subscriber(default_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let output = fmt::Layer::new().with_test_writer().compact();
    Registry::default().with(env_filter).with(output)
}

/// Install the test subscriber. Every helper calls this, so only the first
/// call in a process takes effect.
pub fn init_test_subscriber() {
    let _ = LogTracer::init();
    let _ = get_subscriber("error").try_init();
}
