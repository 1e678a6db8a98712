//! Validated route records.

use super::{RouteId, StationId};

/// One bus route: an identifier and the ordered sequence of stations it
/// visits.
///
/// Records are only produced by the loader after the whole data file has
/// passed validation, so consumers may rely on the stop sequence having
/// at least two stations and no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Route identifier, unique within the dataset.
    pub id: RouteId,

    /// Stations in travel order.
    pub stations: Vec<StationId>,
}

impl RouteRecord {
    /// Create a record from an already-validated stop sequence.
    pub fn new(id: RouteId, stations: Vec<StationId>) -> Self {
        Self { id, stations }
    }
}
