use std::io;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Installs the stderr subscriber. Call once at startup.
///
/// Filter precedence: `RUST_LOG`, then `--verbose`, then the config file's
/// `log_level`, then `warn`. Logs never go to stdout, which carries results.
pub fn init_logging(verbose: bool, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose {
            VERBOSE_FILTER
        } else {
            configured.unwrap_or(DEFAULT_FILTER)
        };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
