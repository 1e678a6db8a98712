//! Web layer for the bus route search service.
//!
//! Provides the HTTP endpoint that answers direct-connection queries
//! against the startup-built adjacency index.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
