//! Chat server exposing chat and message creation over HTTP.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kaiwa-server -- --repository memory
//! ```

use clap::Parser;
use kaiwa_server::ServerConfig;
use kaiwa_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = kaiwa_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
