use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr so stdout only ever carries the result.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or
/// debug output for this crate when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,tinyurl_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: tests and embedders may already have a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
