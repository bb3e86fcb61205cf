//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Filter used when `RUST_LOG` is unset, by `-v` count
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing human-readable events to stderr
///
/// `RUST_LOG` wins over the verbosity flag when set.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbosity: u8) -> Result<(), anyhow::Error> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
