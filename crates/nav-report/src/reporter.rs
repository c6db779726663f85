//! Fuel, budget, and reachability reports.
//!
//! Every report runs one fresh shortest-path query through the reporter's
//! [`PathEngine`], so it always reflects the network's current block and
//! maintenance state.

use nav_core::{CityId, FuelConfig};
use nav_engine::{DijkstraEngine, DistanceTable, PathEngine};
use nav_network::RoadNetwork;

use crate::{ReportResult, Route, reconstruct_path};

// ── Report rows ───────────────────────────────────────────────────────────────

/// A city reachable from the query source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReachableEntry {
    pub city:        CityId,
    pub distance_km: u64,
}

/// A city whose trip cost fits the budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetEntry {
    pub city:        CityId,
    pub distance_km: u64,
    pub cost:        f64,
}

/// Fuel needed to reach a city.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuelEntry {
    pub city:        CityId,
    pub distance_km: u64,
    pub fuel_liters: f64,
}

/// Route plus fuel and cost estimates between two cities.
#[derive(Clone, Debug, PartialEq)]
pub struct TripSummary {
    pub route:       Route,
    pub distance_km: u64,
    pub fuel_liters: f64,
    pub cost:        f64,
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Builds reports from shortest-path queries and a fixed fuel model.
#[derive(Clone, Debug, Default)]
pub struct Reporter<E: PathEngine = DijkstraEngine> {
    engine: E,
    fuel:   FuelConfig,
}

impl Reporter<DijkstraEngine> {
    pub fn new(fuel: FuelConfig) -> Self {
        Self::with_engine(DijkstraEngine, fuel)
    }
}

impl<E: PathEngine> Reporter<E> {
    pub fn with_engine(engine: E, fuel: FuelConfig) -> Self {
        Self { engine, fuel }
    }

    pub fn fuel(&self) -> &FuelConfig {
        &self.fuel
    }

    /// Run the underlying shortest-path query.
    pub fn distances(&self, network: &RoadNetwork, source: CityId) -> ReportResult<DistanceTable> {
        Ok(self.engine.shortest_paths(network, source)?)
    }

    /// Every city reachable from `source` (excluding it), in id order.
    pub fn reachable_cities(&self, network: &RoadNetwork, source: CityId) -> ReportResult<Vec<ReachableEntry>> {
        let table = self.distances(network, source)?;
        Ok(table
            .reachable()
            .map(|(city, distance_km)| ReachableEntry { city, distance_km })
            .collect())
    }

    /// The reachable city furthest from `source`.  The lowest id wins ties.
    pub fn farthest_city(&self, network: &RoadNetwork, source: CityId) -> ReportResult<Option<ReachableEntry>> {
        let reachable = self.reachable_cities(network, source)?;
        Ok(reachable
            .into_iter()
            .fold(None, |best: Option<ReachableEntry>, e| match best {
                Some(b) if b.distance_km >= e.distance_km => Some(b),
                _ => Some(e),
            }))
    }

    /// Shortest route from `source` to `target` with fuel and cost.
    ///
    /// `Ok(None)` means no unblocked route exists.
    pub fn trip(&self, network: &RoadNetwork, source: CityId, target: CityId) -> ReportResult<Option<TripSummary>> {
        let table = self.distances(network, source)?;
        let Some(route) = reconstruct_path(network, &table, target) else {
            log::debug!("no route from {source} to {target}");
            return Ok(None);
        };
        let distance_km = route.distance_km;
        Ok(Some(TripSummary {
            route,
            distance_km,
            fuel_liters: self.fuel.fuel_required(distance_km),
            cost:        self.fuel.trip_cost(distance_km),
        }))
    }

    /// Reachable cities (excluding `source`) whose trip cost is at most
    /// `budget`, in id order.
    pub fn cities_within_budget(
        &self,
        network: &RoadNetwork,
        source:  CityId,
        budget:  f64,
    ) -> ReportResult<Vec<BudgetEntry>> {
        let table = self.distances(network, source)?;
        Ok(table
            .reachable()
            .map(|(city, distance_km)| BudgetEntry {
                city,
                distance_km,
                cost: self.fuel.trip_cost(distance_km),
            })
            .filter(|e| e.cost <= budget)
            .collect())
    }

    /// Reachable cities (excluding `source`) ordered by fuel needed,
    /// smallest first.  Equal fuel keeps id order.
    pub fn cities_by_fuel_ascending(&self, network: &RoadNetwork, source: CityId) -> ReportResult<Vec<FuelEntry>> {
        let table = self.distances(network, source)?;
        let mut entries: Vec<FuelEntry> = table
            .reachable()
            .map(|(city, distance_km)| FuelEntry {
                city,
                distance_km,
                fuel_liters: self.fuel.fuel_required(distance_km),
            })
            .collect();
        // `sort_by` is stable.
        entries.sort_by(|a, b| a.fuel_liters.total_cmp(&b.fuel_liters));
        Ok(entries)
    }
}
