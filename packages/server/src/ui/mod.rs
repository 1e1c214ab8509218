//! UI layer: HTTP adapter between axum and the mediator.

pub mod error;
pub mod handler;
pub mod state;
