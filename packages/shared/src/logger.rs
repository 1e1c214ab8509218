//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise the binary's own crate logs at
/// `default_level` and `tower_http` at `debug`.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (e.g. `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level used when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_name = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{crate_name}={default_level},tower_http=debug,info").into()
    });

    // try_init: integration tests may call this more than once per process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(true),
        )
        .try_init();
}
