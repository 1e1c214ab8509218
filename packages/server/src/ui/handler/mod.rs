//! Handler modules for HTTP endpoints.

pub mod http;

pub use http::{create_chat, create_message, get_chat, health_check};
