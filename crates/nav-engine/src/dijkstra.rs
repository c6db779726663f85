//! Single-source shortest paths.
//!
//! # Pluggability
//!
//! Reports call the engine through the [`PathEngine`] trait, so a shell can
//! swap in another algorithm (A*, bidirectional search) without touching the
//! reporter.  The default [`DijkstraEngine`] is a binary-heap Dijkstra,
//! O((V + E) log V).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nav_core::CityId;
use nav_network::RoadNetwork;

use crate::{DistanceTable, EngineError, EngineResult};

// ── PathEngine trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path algorithm.
///
/// Implementations must treat blocked arcs as absent and must not mutate the
/// network.  They are `Send + Sync` so one engine can serve queries from
/// several threads holding read access to a
/// [`SharedNetwork`](nav_network::SharedNetwork).
pub trait PathEngine: Send + Sync {
    /// Distances and predecessors from `source` to every city.
    fn shortest_paths(&self, network: &RoadNetwork, source: CityId) -> EngineResult<DistanceTable>;
}

/// Standard Dijkstra over the adjacency lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn shortest_paths(&self, network: &RoadNetwork, source: CityId) -> EngineResult<DistanceTable> {
        shortest_paths(network, source)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Run Dijkstra from `source` over all unblocked arcs.
///
/// The first time a city is popped from the heap its distance is final;
/// later heap entries for it are stale and skipped.  Equal distances pop in
/// ascending `CityId` order.
pub fn shortest_paths(network: &RoadNetwork, source: CityId) -> EngineResult<DistanceTable> {
    if !network.contains(source) {
        return Err(EngineError::UnknownCity(source));
    }

    let n = network.city_count();
    let mut table   = DistanceTable::new(source, n);
    let mut settled = vec![false; n];

    // Min-heap: (distance, city). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u64, CityId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, city))) = heap.pop() {
        if settled[city.index()] {
            continue;
        }
        settled[city.index()] = true;

        for road in network.roads_from(city) {
            if road.blocked {
                continue;
            }
            let candidate = dist.saturating_add(road.weight_km as u64);
            if candidate < table.raw(road.to) {
                table.set(road.to, candidate, city);
                heap.push(Reverse((candidate, road.to)));
            }
        }
    }

    log::debug!(
        "shortest_paths from {source}: {} of {} cities reachable",
        settled.iter().filter(|&&s| s).count(),
        n
    );
    Ok(table)
}
