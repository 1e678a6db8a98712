//! Limits applied while validating a route data file.

/// Maximum number of routes allowed in a data file.
pub const MAX_ROUTES: usize = 100_000;

/// Maximum number of stations allowed on a single route.
pub const MAX_STATIONS_PER_ROUTE: usize = 1_000;

/// Maximum number of unique stations allowed across all routes.
pub const MAX_UNIQUE_STATIONS: usize = 1_000_000;

/// Configured limits for one load attempt.
///
/// The defaults bound the worst case the index is designed for:
/// 100,000 routes of up to 1,000 stations each.
#[derive(Debug, Clone)]
pub struct LoadLimits {
    /// Maximum declared route count.
    pub max_routes: usize,

    /// Maximum stations on one route.
    pub max_stations_per_route: usize,

    /// Maximum unique stations across the whole file.
    pub max_unique_stations: usize,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            max_routes: MAX_ROUTES,
            max_stations_per_route: MAX_STATIONS_PER_ROUTE,
            max_unique_stations: MAX_UNIQUE_STATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let limits = LoadLimits::default();
        assert_eq!(limits.max_routes, 100_000);
        assert_eq!(limits.max_stations_per_route, 1_000);
        assert_eq!(limits.max_unique_stations, 1_000_000);
    }
}
