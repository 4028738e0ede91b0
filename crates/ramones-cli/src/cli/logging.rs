use tracing_subscriber::EnvFilter;

pub(super) const LOG_ENV_VAR: &str = "RAMONES_LOG";

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber; `RAMONES_LOG` wins over `-v` flags.
pub(super) fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // a subscriber may already be installed when `run` is called repeatedly
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
