//! Process wiring: repositories, mediator, router and the HTTP listener.

mod error;
mod runner;
mod signal;

pub use error::ServerError;
pub use runner::{
    Repositories, build_app_state, build_repositories, create_router, default_event_dispatcher,
    run,
};
