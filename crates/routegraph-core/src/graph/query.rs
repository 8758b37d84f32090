//! Path queries layered on the breadth-first walk enumerator

use crate::graph::bfs::bfs_find_paths;
use crate::graph::types::PathRecord;
use crate::graph::Graph;
use crate::node::Node;
use tracing::debug;

impl Graph {
    /// All walks from `start` that reach `destination`, up to
    /// `max_path_length` nodes long (see [`bfs_find_paths`]).
    ///
    /// Nodes unknown to the graph are accepted: an unknown start only
    /// matches itself, an unknown destination is never reached.
    pub fn find_paths(
        &self,
        start: &Node,
        destination: &Node,
        max_path_length: usize,
    ) -> Vec<PathRecord> {
        let Some(start_idx) = self.lookup(start.id()) else {
            return if start.id() == destination.id() {
                vec![PathRecord {
                    path: vec![start.id().to_string()],
                    cost: 0,
                }]
            } else {
                Vec::new()
            };
        };
        let Some(destination_idx) = self.lookup(destination.id()) else {
            return Vec::new();
        };

        bfs_find_paths(self, start_idx, destination_idx, max_path_length)
    }

    /// Walks with between 1 and `max_stops` stops
    #[tracing::instrument(skip(self, start, destination), fields(start = %start.id(), destination = %destination.id()))]
    pub fn paths_with_max_stops(
        &self,
        start: &Node,
        destination: &Node,
        max_stops: usize,
    ) -> Vec<PathRecord> {
        self.find_paths(start, destination, max_stops)
            .into_iter()
            .filter(|record| record.path.len() > 1)
            .collect()
    }

    /// Walks with exactly `stops` stops
    #[tracing::instrument(skip(self, start, destination), fields(start = %start.id(), destination = %destination.id()))]
    pub fn paths_with_exact_stops(
        &self,
        start: &Node,
        destination: &Node,
        stops: usize,
    ) -> Vec<PathRecord> {
        self.find_paths(start, destination, stops)
            .into_iter()
            .filter(|record| record.path.len() == stops + 1)
            .collect()
    }

    /// Walks whose total cost is strictly below `max_distance`.
    ///
    /// The distance cap is turned into a stop bound of
    /// `ceil(max_distance / min_weight)`. This is a heuristic that only holds
    /// for positive weights; a zero minimum weight is treated as 1.
    #[tracing::instrument(skip(self, start, destination), fields(start = %start.id(), destination = %destination.id()))]
    pub fn paths_under_max_distance(
        &self,
        start: &Node,
        destination: &Node,
        max_distance: u64,
    ) -> Vec<PathRecord> {
        let Some(stop_bound) = self.stop_bound_for_distance(max_distance) else {
            return Vec::new();
        };

        self.paths_with_max_stops(start, destination, stop_bound)
            .into_iter()
            .filter(|record| record.cost < max_distance)
            .collect()
    }

    /// Stop bound that `paths_under_max_distance` enumerates for a distance
    /// cap: `ceil(max_distance / min_weight)`, or `None` for a graph without
    /// routes.
    pub fn stop_bound_for_distance(&self, max_distance: u64) -> Option<usize> {
        let min_weight = self.min_weight()?;
        let stop_bound = max_distance.div_ceil(u64::from(min_weight.max(1)));
        let stop_bound = usize::try_from(stop_bound).unwrap_or(usize::MAX);
        debug!(min_weight, stop_bound, "distance_to_stop_bound");
        Some(stop_bound)
    }

    /// Cheapest walk of at least one stop, or `None` when there is none.
    ///
    /// Enumerates walks up to `node_count` nodes and keeps the first walk
    /// with the lowest cost, so a start equal to the destination yields the
    /// cheapest cycle back to it.
    #[tracing::instrument(skip(self, start, destination), fields(start = %start.id(), destination = %destination.id()))]
    pub fn shortest_path(&self, start: &Node, destination: &Node) -> Option<PathRecord> {
        self.find_paths(start, destination, self.node_count())
            .into_iter()
            .filter(|record| record.path.len() > 1)
            .fold(None, |best: Option<PathRecord>, record| match best {
                Some(current) if current.cost <= record.cost => Some(current),
                _ => Some(record),
            })
    }
}
