//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, StationId};

/// Query parameters for the direct-connection endpoints.
///
/// The ids arrive as raw query strings and are parsed by the handler so
/// a bad value becomes a JSON 400 rather than a plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct DirectRouteRequest {
    /// Departure station id
    pub dep_sid: String,

    /// Arrival station id
    pub arr_sid: String,
}

/// Response for the direct-connection check.
#[derive(Debug, Serialize)]
pub struct DirectRouteResponse {
    /// Departure station id, echoed back
    pub dep_sid: StationId,

    /// Arrival station id, echoed back
    pub arr_sid: StationId,

    /// Whether some route goes from departure to arrival in that order
    pub direct_bus_route: bool,
}

/// Response listing the routes realizing a connection.
#[derive(Debug, Serialize)]
pub struct ConnectingRoutesResponse {
    /// Departure station id, echoed back
    pub dep_sid: StationId,

    /// Arrival station id, echoed back
    pub arr_sid: StationId,

    /// Connecting route ids in data file order; empty when the pair is
    /// not connected
    pub route_ids: Vec<RouteId>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
