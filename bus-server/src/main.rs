use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use bus_server::loader::{self, LoadLimits};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Exactly one argument: the path to the route data file.
    let mut args = std::env::args().skip(1);
    let data_file = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => {
            eprintln!("usage: bus-server <route-data-file>");
            std::process::exit(2);
        }
    };

    let limits = limits_from_env();

    // Fail fast: an invalid or unreadable data file must never reach a
    // serving state.
    let index = match loader::load(&data_file, &limits) {
        Ok(index) => index,
        Err(e) => {
            tracing::error!("failed to load route data: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        pairs = index.pair_count(),
        origins = index.origin_count(),
        "adjacency index built"
    );

    let state = AppState::new(index);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8088));
    println!("Bus route search listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                                - Health check");
    println!("  GET /api/direct?dep_sid=X&arr_sid=Y        - Direct connection check");
    println!("  GET /api/direct/routes?dep_sid=X&arr_sid=Y - Connecting route ids");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Read limit overrides from the environment, keeping the defaults for
/// anything unset or unparseable.
fn limits_from_env() -> LoadLimits {
    let defaults = LoadLimits::default();
    LoadLimits {
        max_routes: env_limit("BUS_MAX_ROUTES", defaults.max_routes),
        max_stations_per_route: env_limit(
            "BUS_MAX_STATIONS_PER_ROUTE",
            defaults.max_stations_per_route,
        ),
        max_unique_stations: env_limit("BUS_MAX_UNIQUE_STATIONS", defaults.max_unique_stations),
    }
}

fn env_limit(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Warning: {name}={value} is not a number, using {default}");
            default
        }),
        Err(_) => default,
    }
}
