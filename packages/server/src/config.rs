//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Storage backend behind the repository traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepositoryBackend {
    /// Process-local storage; data is lost on restart
    Memory,
    /// MongoDB document store
    Mongodb,
}

/// Kaiwa chat server
#[derive(Debug, Clone, Parser)]
#[command(name = "kaiwa-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "KAIWA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "KAIWA_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Repository implementation
    #[arg(long, env = "KAIWA_REPOSITORY", value_enum, default_value_t = RepositoryBackend::Memory)]
    pub repository: RepositoryBackend,

    /// MongoDB connection string
    #[arg(
        long,
        env = "MONGODB_CONNECTION_URI",
        default_value = "mongodb://mongodb:27017"
    )]
    pub mongodb_uri: String,

    /// MongoDB database holding the chat collection
    #[arg(long, env = "MONGODB_CHAT_DATABASE", default_value = "chat_db")]
    pub mongodb_database: String,

    /// MongoDB collection storing chat documents
    #[arg(long, env = "MONGODB_CHAT_COLLECTION", default_value = "chat_collection")]
    pub mongodb_collection: String,

    /// Connect and server-selection timeout for storage calls, in seconds
    #[arg(long, env = "KAIWA_STORAGE_TIMEOUT_SECS", default_value_t = 5)]
    pub storage_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "KAIWA_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_secs)
    }
}
