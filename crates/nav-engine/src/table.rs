//! Per-query distance and predecessor table.

use nav_core::CityId;

/// Result of a single-source query: one `(value, predecessor)` pair per city.
///
/// For [`shortest_paths`](crate::shortest_paths) the value is the shortest
/// distance from the source in km; for
/// [`minimum_connectivity`](crate::minimum_connectivity) it is the weight of
/// the tree arc that attached the city.  The source itself has value 0 and no
/// predecessor.  Cities the query never reached have neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceTable {
    source: CityId,
    dist:   Vec<u64>,
    pred:   Vec<CityId>,
}

impl DistanceTable {
    /// Value stored for cities the query never reached.
    pub const UNREACHABLE: u64 = u64::MAX;

    /// A table for `city_count` cities where only `source` is reached.
    pub(crate) fn new(source: CityId, city_count: usize) -> Self {
        let mut dist = vec![Self::UNREACHABLE; city_count];
        dist[source.index()] = 0;
        Self {
            source,
            dist,
            pred: vec![CityId::INVALID; city_count],
        }
    }

    #[inline]
    pub(crate) fn raw(&self, city: CityId) -> u64 {
        self.dist[city.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, city: CityId, value: u64, via: CityId) {
        self.dist[city.index()] = value;
        self.pred[city.index()] = via;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn source(&self) -> CityId {
        self.source
    }

    /// Number of cities covered (the network's city count at query time).
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Distance to `city`, or `None` if unreachable or out of range.
    pub fn distance(&self, city: CityId) -> Option<u64> {
        self.dist
            .get(city.index())
            .copied()
            .filter(|&d| d != Self::UNREACHABLE)
    }

    /// The city `city` was reached from, or `None` for the source and for
    /// unreached cities.
    pub fn predecessor(&self, city: CityId) -> Option<CityId> {
        self.pred
            .get(city.index())
            .copied()
            .filter(|p| p.is_valid())
    }

    pub fn is_reachable(&self, city: CityId) -> bool {
        self.distance(city).is_some()
    }

    /// Every reached city except the source, in id order.
    pub fn reachable(&self) -> impl Iterator<Item = (CityId, u64)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .map(|(i, &d)| (CityId(i as u32), d))
            .filter(move |&(c, d)| c != self.source && d != Self::UNREACHABLE)
    }

    /// Cities from the source to `target` inclusive, following predecessor
    /// links.  `None` if `target` was not reached.
    ///
    /// Walks the chain iteratively, so long routes cost no stack depth.
    pub fn path_to(&self, target: CityId) -> Option<Vec<CityId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = self.predecessor(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}
