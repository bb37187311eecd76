use tracing::warn;
use tracing_subscriber::EnvFilter;

use visitor_counter::config::CounterConfig;
use visitor_counter::counter::{Trigger, VisitorCounter};
use visitor_counter::render;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

/// Fires one counting cycle for a generic page load and prints the rendered
/// label. Exits 0 even when the count fails; failures only reach the logs.
#[tokio::main]
async fn main() {
    init_tracing();

    let config = match CounterConfig::load() {
        Ok(config) => config,
        Err(error) => {
            warn!(error = %error, "ignoring invalid config file, using defaults");
            CounterConfig::default()
        }
    };

    let counter = VisitorCounter::from_config(config, None);
    let state = counter
        .record_visit(Trigger::PageLoad {
            path: "/".to_string(),
        })
        .await;

    println!("{}", render::label(&state));
}
