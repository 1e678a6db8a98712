//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, info};

use crate::domain::StationId;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/direct", get(direct_route))
        .route("/api/direct/routes", get(connecting_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if the departure station is directly connected to the arrival
/// station on some route.
async fn direct_route(
    State(state): State<AppState>,
    Query(req): Query<DirectRouteRequest>,
) -> Result<Json<DirectRouteResponse>, AppError> {
    let (dep, arr) = parse_station_pair(&req)?;

    let direct_bus_route =
        state.index.has_origin(dep) && state.index.is_directly_connected(dep, arr);

    if direct_bus_route {
        // The connecting routes are not part of the answer, but they
        // make troubleshooting a surprising "true" much easier.
        info!(
            %dep, %arr,
            routes = ?state.index.connecting_routes(dep, arr),
            "stations are directly connected"
        );
    } else {
        debug!(%dep, %arr, "no route directly connects the stations");
    }

    Ok(Json(DirectRouteResponse {
        dep_sid: dep,
        arr_sid: arr,
        direct_bus_route,
    }))
}

/// List the routes on which the departure station precedes the arrival
/// station.
async fn connecting_routes(
    State(state): State<AppState>,
    Query(req): Query<DirectRouteRequest>,
) -> Result<Json<ConnectingRoutesResponse>, AppError> {
    let (dep, arr) = parse_station_pair(&req)?;

    Ok(Json(ConnectingRoutesResponse {
        dep_sid: dep,
        arr_sid: arr,
        route_ids: state.index.connecting_routes(dep, arr).to_vec(),
    }))
}

fn parse_station_pair(req: &DirectRouteRequest) -> Result<(StationId, StationId), AppError> {
    let dep = req.dep_sid.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid departure station id: {}", req.dep_sid),
    })?;
    let arr = req.arr_sid.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid arrival station id: {}", req.arr_sid),
    })?;
    Ok((dep, arr))
}

/// Application-level web errors.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        debug!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
