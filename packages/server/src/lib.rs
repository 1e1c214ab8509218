//! Chat backend library.
//!
//! Commands coming from the HTTP layer are routed by a [`usecase::Mediator`]
//! to their handlers, which validate input through value objects, mutate
//! entities, persist them through repository traits and finally publish the
//! domain events the entities accumulated.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use server::run;
