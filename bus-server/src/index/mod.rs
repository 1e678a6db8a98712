//! Adjacency index answering direct-connection queries.
//!
//! The index maps an ordered `(origin, destination)` station pair to the
//! routes on which the origin precedes the destination. "Precedes" spans
//! the whole remainder of a route, not just the next stop: for a route
//! visiting [s0..sn], every pair (si, sj) with i < j is recorded. The
//! relation is directional; (A,B) says nothing about (B,A).
//!
//! The index is populated once at startup and never mutated afterwards,
//! so it can be shared behind an `Arc` and queried from any number of
//! concurrent readers without locking. All queries are O(1)-amortized
//! hash lookups, independent of dataset size.

use std::collections::{HashMap, HashSet};

use crate::domain::{RouteId, RouteRecord, StationId};

/// Read-only pair-keyed connectivity map.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Map from (origin, destination) to the routes connecting them, in
    /// the order the routes appeared in the data file.
    connections: HashMap<(StationId, StationId), Vec<RouteId>>,

    /// Stations that appear as the origin of at least one recorded pair.
    origins: HashSet<StationId>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from validated route records, in order.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RouteRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.insert_route(record);
        }
        index
    }

    /// Merge one route into the index.
    ///
    /// Appends the route's id to every (si, sj) pair with i < j. All of a
    /// route's pairs are attributed before the next route is inserted, so
    /// per-key lists reflect route submission order.
    pub fn insert_route(&mut self, record: &RouteRecord) {
        for (i, &origin) in record.stations.iter().enumerate() {
            for &destination in &record.stations[i + 1..] {
                self.connections
                    .entry((origin, destination))
                    .or_default()
                    .push(record.id);
                self.origins.insert(origin);
            }
        }
    }

    /// Check if a station is the origin of at least one recorded pair.
    pub fn has_origin(&self, origin: StationId) -> bool {
        self.origins.contains(&origin)
    }

    /// Check if some route takes you from `origin` to `destination` in
    /// that direction.
    pub fn is_directly_connected(&self, origin: StationId, destination: StationId) -> bool {
        self.connections.contains_key(&(origin, destination))
    }

    /// Get the routes connecting `origin` to `destination`, in the order
    /// the routes were loaded. Empty if the pair is unknown.
    pub fn connecting_routes(&self, origin: StationId, destination: StationId) -> &[RouteId] {
        self.connections
            .get(&(origin, destination))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct (origin, destination) pairs recorded.
    pub fn pair_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of distinct origin stations.
    pub fn origin_count(&self) -> usize {
        self.origins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: u64, stations: &[u64]) -> RouteRecord {
        RouteRecord::new(
            RouteId(id),
            stations.iter().copied().map(StationId).collect(),
        )
    }

    #[test]
    fn empty_index() {
        let index = AdjacencyIndex::new();

        assert!(!index.has_origin(StationId(0)));
        assert!(!index.is_directly_connected(StationId(0), StationId(1)));
        assert!(index.connecting_routes(StationId(0), StationId(1)).is_empty());
        assert_eq!(index.pair_count(), 0);
        assert_eq!(index.origin_count(), 0);
    }

    #[test]
    fn single_route_covers_all_later_stations() {
        // Route 9: 0 -> 1 -> 2 -> 3. Non-adjacent stops on the same
        // route are still directly connected.
        let index = AdjacencyIndex::from_records(&[route(9, &[0, 1, 2, 3])]);

        for i in 0..3u64 {
            for j in (i + 1)..4 {
                assert!(
                    index.is_directly_connected(StationId(i), StationId(j)),
                    "expected {i} -> {j}"
                );
                assert_eq!(
                    index.connecting_routes(StationId(i), StationId(j)),
                    &[RouteId(9)]
                );
            }
        }
        assert_eq!(index.connecting_routes(StationId(1), StationId(3)), &[RouteId(9)]);
        assert_eq!(index.pair_count(), 6);
    }

    #[test]
    fn connections_are_directional() {
        let index = AdjacencyIndex::from_records(&[route(1, &[5, 7])]);

        assert!(index.is_directly_connected(StationId(5), StationId(7)));
        assert!(!index.is_directly_connected(StationId(7), StationId(5)));
    }

    #[test]
    fn reverse_direction_from_another_route() {
        let index = AdjacencyIndex::from_records(&[route(1, &[5, 7]), route(2, &[7, 5])]);

        assert_eq!(index.connecting_routes(StationId(5), StationId(7)), &[RouteId(1)]);
        assert_eq!(index.connecting_routes(StationId(7), StationId(5)), &[RouteId(2)]);
    }

    #[test]
    fn route_ids_accumulate_in_load_order() {
        let index = AdjacencyIndex::from_records(&[
            route(1, &[5, 7]),
            route(2, &[5, 6, 7]),
            route(3, &[9, 5, 7, 8]),
        ]);

        assert_eq!(
            index.connecting_routes(StationId(5), StationId(7)),
            &[RouteId(1), RouteId(2), RouteId(3)]
        );
    }

    #[test]
    fn reads_do_not_mutate() {
        let index = AdjacencyIndex::from_records(&[route(1, &[5, 7]), route(2, &[5, 7])]);

        let first: Vec<_> = index.connecting_routes(StationId(5), StationId(7)).to_vec();
        let second: Vec<_> = index.connecting_routes(StationId(5), StationId(7)).to_vec();
        assert_eq!(first, second);
        assert_eq!(first, vec![RouteId(1), RouteId(2)]);
    }

    #[test]
    fn terminus_is_not_an_origin() {
        let index = AdjacencyIndex::from_records(&[route(1, &[3, 4, 5])]);

        assert!(index.has_origin(StationId(3)));
        assert!(index.has_origin(StationId(4)));
        assert!(!index.has_origin(StationId(5)));
        assert_eq!(index.origin_count(), 2);
    }

    #[test]
    fn incremental_insert_matches_batch_build() {
        let records = [route(4, &[1, 2, 3]), route(5, &[2, 3])];

        let mut incremental = AdjacencyIndex::new();
        for record in &records {
            incremental.insert_route(record);
        }
        let batch = AdjacencyIndex::from_records(&records);

        assert_eq!(incremental.pair_count(), batch.pair_count());
        assert_eq!(
            incremental.connecting_routes(StationId(2), StationId(3)),
            batch.connecting_routes(StationId(2), StationId(3))
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a stop sequence: 2..=20 distinct station ids.
    fn distinct_stations() -> impl Strategy<Value = Vec<u64>> {
        proptest::collection::hash_set(0u64..1_000, 2..=20)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    proptest! {
        /// Every ordered pair (i < j) of a route is connected and
        /// attributed to exactly that route.
        #[test]
        fn all_forward_pairs_connected(stations in distinct_stations()) {
            let record = RouteRecord::new(
                RouteId(17),
                stations.iter().copied().map(StationId).collect(),
            );
            let index = AdjacencyIndex::from_records(&[record]);

            for (i, &a) in stations.iter().enumerate() {
                for &b in &stations[i + 1..] {
                    prop_assert!(index.is_directly_connected(StationId(a), StationId(b)));
                    prop_assert_eq!(
                        index.connecting_routes(StationId(a), StationId(b)),
                        &[RouteId(17)]
                    );
                }
            }
        }

        /// With a single route of distinct stations, no reversed pair is
        /// ever connected.
        #[test]
        fn no_backward_pair_connected(stations in distinct_stations()) {
            let record = RouteRecord::new(
                RouteId(17),
                stations.iter().copied().map(StationId).collect(),
            );
            let index = AdjacencyIndex::from_records(&[record]);

            for (i, &a) in stations.iter().enumerate() {
                for &b in &stations[i + 1..] {
                    prop_assert!(!index.is_directly_connected(StationId(b), StationId(a)));
                }
            }
        }

        /// Pair count for one route of n stations is n*(n-1)/2.
        #[test]
        fn pair_count_is_triangular(stations in distinct_stations()) {
            let n = stations.len();
            let record = RouteRecord::new(
                RouteId(1),
                stations.into_iter().map(StationId).collect(),
            );
            let index = AdjacencyIndex::from_records(&[record]);

            prop_assert_eq!(index.pair_count(), n * (n - 1) / 2);
        }
    }
}
