//! Diagnostic logging setup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output for
/// this crate and everything else stays silent.
pub fn init_logging(verbose: bool) {
    let (level_filter, level) = if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::OFF, "off")
    };
    let app_filter = Targets::new().with_target("money_tracker", level_filter);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Diagnostics go to stderr so command output stays clean
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter)
        .with(env_filter)
        .try_init();
}
