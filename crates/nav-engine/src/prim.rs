//! Minimum-weight connector tree (Prim).
//!
//! Grows a tree from `start` one city at a time.  Each unvisited city keeps a
//! **key**: the lightest unblocked arc from the tree to it.  Unlike Dijkstra,
//! relaxation compares the raw arc weight against the key, not a cumulative
//! distance, so the result is a minimum spanning tree of the component
//! reachable from `start`, not a shortest-path tree.
//!
//! Only arcs leaving the city being added are examined.  When a road is
//! blocked in one direction only, the tree can still use it in the other.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nav_core::CityId;
use nav_network::RoadNetwork;

use crate::{DistanceTable, EngineError, EngineResult};

/// One arc of a [`SpanningTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent:    CityId,
    pub child:     CityId,
    pub weight_km: u64,
}

/// Output of [`minimum_connectivity`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    /// Key (attaching arc weight) and parent per city.
    pub table: DistanceTable,
    /// Sum of the keys of every city with a parent.
    pub total_cost: u64,
}

impl SpanningTree {
    /// Tree arcs in ascending child id order.  Cities outside the reachable
    /// component do not appear.
    pub fn edges(&self) -> impl Iterator<Item = TreeEdge> + '_ {
        (0..self.table.len() as u32).map(CityId).filter_map(|child| {
            let parent = self.table.predecessor(child)?;
            Some(TreeEdge { parent, child, weight_km: self.table.raw(child) })
        })
    }

    /// Cities connected by the tree, `start` included.
    pub fn city_count(&self) -> usize {
        self.table.reachable().count() + 1
    }
}

/// Compute the minimum connector tree rooted at `start` over unblocked arcs.
pub fn minimum_connectivity(network: &RoadNetwork, start: CityId) -> EngineResult<SpanningTree> {
    if !network.contains(start) {
        return Err(EngineError::UnknownCity(start));
    }

    let n = network.city_count();
    let mut table   = DistanceTable::new(start, n);
    let mut visited = vec![false; n];

    // Min-heap of (key, city).
    let mut heap: BinaryHeap<Reverse<(u64, CityId)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((_, city))) = heap.pop() {
        if visited[city.index()] {
            continue;
        }
        visited[city.index()] = true;

        for road in network.roads_from(city) {
            if road.blocked || visited[road.to.index()] {
                continue;
            }
            let weight = road.weight_km as u64;
            if weight < table.raw(road.to) {
                table.set(road.to, weight, city);
                heap.push(Reverse((weight, road.to)));
            }
        }
    }

    let total_cost: u64 = (0..n as u32)
        .map(CityId)
        .filter(|&c| table.predecessor(c).is_some())
        .map(|c| table.raw(c))
        .sum();

    log::debug!("minimum_connectivity from {start}: total {total_cost} km");
    Ok(SpanningTree { table, total_cost })
}
