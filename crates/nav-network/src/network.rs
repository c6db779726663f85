//! Road network representation.
//!
//! # Data layout
//!
//! Cities are dense `CityId`s `0..city_count`.  Each city owns a `Vec<Road>`
//! of outgoing arcs, indexed by `CityId`:
//!
//! ```text
//! roads[c] = [oldest arc, ..., newest arc]
//! ```
//!
//! Arcs are appended, but every public traversal walks the vector back to
//! front, so the observable storage order is **most recently added first**.
//! Lookups such as [`RoadNetwork::find_arc`] therefore return the newest arc
//! when a city pair has been connected more than once.
//!
//! A bidirectional road is two independent directed arcs.  Block/unblock of a
//! road touches both; maintenance touches only the arc it is asked for.

use rustc_hash::FxHashMap;

use nav_core::CityId;

use crate::{NetworkError, NetworkResult};

/// Weight multiplier applied by [`RoadNetwork::apply_maintenance`].
/// The adjusted weight is truncated toward zero.
pub const MAINTENANCE_FACTOR: f64 = 1.3;

// ── Road ──────────────────────────────────────────────────────────────────────

/// One directed, weighted arc out of a city.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    /// Destination city.
    pub to: CityId,
    /// Length in kilometres.
    pub weight_km: u32,
    /// Excluded from path and connectivity queries while set.
    pub blocked: bool,
    /// Set once by maintenance; never cleared.
    pub under_maintenance: bool,
}

impl Road {
    fn new(to: CityId, weight_km: u32) -> Self {
        Self { to, weight_km, blocked: false, under_maintenance: false }
    }
}

/// Outcome of a successful [`RoadNetwork::apply_maintenance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaintenanceReport {
    pub from:        CityId,
    pub to:          CityId,
    pub original_km: u32,
    pub adjusted_km: u32,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Growable directed road graph with per-arc mutable state.
#[derive(Clone, Debug, Default)]
pub struct RoadNetwork {
    names: Vec<String>,
    roads: Vec<Vec<Road>>,
    /// First city registered under each name.
    by_name: FxHashMap<String, CityId>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.names.len()
    }

    /// Total number of directed arcs.
    pub fn road_count(&self) -> usize {
        self.roads.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn contains(&self, city: CityId) -> bool {
        city.index() < self.names.len()
    }

    // ── Cities ────────────────────────────────────────────────────────────

    /// Register a city and return its `CityId` (sequential from 0).
    ///
    /// Names are not deduplicated; a repeated name gets a fresh id, but
    /// [`find_city`](Self::find_city) keeps resolving to the first one.
    pub fn add_city(&mut self, name: impl Into<String>) -> CityId {
        let name = name.into();
        let id = CityId(self.names.len() as u32);
        self.by_name.entry(name.clone()).or_insert(id);
        self.names.push(name);
        self.roads.push(Vec::new());
        log::debug!("registered city {:?} as {id}", self.names[id.index()]);
        id
    }

    /// First city registered under exactly `name`.
    pub fn find_city(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Like [`find_city`](Self::find_city) but returns an error for shells
    /// that want to propagate with `?`.
    pub fn resolve(&self, name: &str) -> NetworkResult<CityId> {
        self.find_city(name)
            .ok_or_else(|| NetworkError::CityNotFound(name.to_owned()))
    }

    pub fn city_name(&self, city: CityId) -> Option<&str> {
        self.names.get(city.index()).map(String::as_str)
    }

    /// All cities in id order.
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (CityId(i as u32), name.as_str()))
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    /// Add a **directed** arc `from → to`, unblocked and not under
    /// maintenance.  It becomes the first arc in `from`'s storage order.
    pub fn add_road(&mut self, from: CityId, to: CityId, weight_km: u32) -> NetworkResult<()> {
        self.check(from)?;
        self.check(to)?;
        self.roads[from.index()].push(Road::new(to, weight_km));
        Ok(())
    }

    /// Convenience: add arcs in **both directions** with the same weight.
    pub fn add_two_way_road(&mut self, a: CityId, b: CityId, weight_km: u32) -> NetworkResult<()> {
        self.check(a)?;
        self.check(b)?;
        self.roads[a.index()].push(Road::new(b, weight_km));
        self.roads[b.index()].push(Road::new(a, weight_km));
        log::info!("added road {a} <-> {b} ({weight_km} km)");
        Ok(())
    }

    /// Outgoing arcs of `city`, most recently added first.
    ///
    /// Empty for ids outside the network.
    #[inline]
    pub fn roads_from(&self, city: CityId) -> impl Iterator<Item = &Road> + '_ {
        self.roads
            .get(city.index())
            .map(|v| v.as_slice())
            .unwrap_or_default()
            .iter()
            .rev()
    }

    /// Number of outgoing arcs of `city`.
    pub fn out_degree(&self, city: CityId) -> usize {
        self.roads.get(city.index()).map_or(0, Vec::len)
    }

    /// First arc `from → to` in storage order.
    pub fn find_arc(&self, from: CityId, to: CityId) -> Option<&Road> {
        self.roads_from(from).find(|r| r.to == to)
    }

    fn find_arc_mut(&mut self, from: CityId, to: CityId) -> Option<&mut Road> {
        self.roads
            .get_mut(from.index())?
            .iter_mut()
            .rev()
            .find(|r| r.to == to)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Set the `blocked` flag of the first arc `from → to`.
    ///
    /// Returns `false` and changes nothing when no such arc exists.
    pub fn set_blocked(&mut self, from: CityId, to: CityId, blocked: bool) -> bool {
        match self.find_arc_mut(from, to) {
            Some(road) => {
                road.blocked = blocked;
                true
            }
            None => false,
        }
    }

    /// Block the road between `a` and `b` in both directions.
    ///
    /// Fails only if neither direction has an arc.
    pub fn block_road(&mut self, a: CityId, b: CityId) -> NetworkResult<()> {
        self.set_road_blocked(a, b, true)
    }

    /// Unblock the road between `a` and `b` in both directions.
    pub fn unblock_road(&mut self, a: CityId, b: CityId) -> NetworkResult<()> {
        self.set_road_blocked(a, b, false)
    }

    fn set_road_blocked(&mut self, a: CityId, b: CityId, blocked: bool) -> NetworkResult<()> {
        let forward  = self.set_blocked(a, b, blocked);
        let backward = self.set_blocked(b, a, blocked);
        if !forward && !backward {
            return Err(NetworkError::RoadNotFound { from: a, to: b });
        }
        log::info!(
            "{} road {a} <-> {b}",
            if blocked { "blocked" } else { "unblocked" }
        );
        Ok(())
    }

    /// Put the single directed arc `from → to` under maintenance.
    ///
    /// The weight is multiplied by [`MAINTENANCE_FACTOR`] and truncated; the
    /// reverse arc is left untouched.  Repeated calls compound the penalty.
    pub fn apply_maintenance(&mut self, from: CityId, to: CityId) -> NetworkResult<MaintenanceReport> {
        let road = self
            .find_arc_mut(from, to)
            .ok_or(NetworkError::RoadNotFound { from, to })?;

        let original_km = road.weight_km;
        let adjusted_km = (original_km as f64 * MAINTENANCE_FACTOR) as u32;
        road.weight_km = adjusted_km;
        road.under_maintenance = true;

        log::info!("maintenance on {from} -> {to}: {original_km} km -> {adjusted_km} km");
        Ok(MaintenanceReport { from, to, original_km, adjusted_km })
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn check(&self, city: CityId) -> NetworkResult<()> {
        if self.contains(city) {
            Ok(())
        } else {
            Err(NetworkError::UnknownCity(city))
        }
    }
}
