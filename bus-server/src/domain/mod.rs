//! Domain types for the bus route search service.
//!
//! This module contains the core types that represent validated route
//! data. Identifiers are opaque non-negative integers; a station has no
//! attributes beyond its identity and exists only by appearing in some
//! route.

mod ids;
mod route;

pub use ids::{RouteId, StationId};
pub use route::RouteRecord;
