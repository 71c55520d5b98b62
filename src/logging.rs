//! tracing subscriber setup.

use ews_core::config::EwsConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr. RUST_LOG wins over `--verbose`, which wins over the config file.
/// Without a usable config the default filter applies.
pub fn init(config: Option<&EwsConfig>, verbose: bool) {
    let default = EwsConfig::default();
    let config = config.unwrap_or(&default);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&config.log_filter)
        }
    });

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
