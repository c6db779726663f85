//! Route reconstruction from a distance table.

use std::fmt;

use nav_core::CityId;
use nav_engine::DistanceTable;
use nav_network::RoadNetwork;

/// One city on a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteStop {
    pub city: CityId,
    /// `true` if the arc used to arrive here is under maintenance.  Always
    /// `false` for the first stop.
    pub under_maintenance: bool,
}

/// An ordered route from a query source to a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Stops in travel order; the first is the source, the last the target.
    pub stops: Vec<RouteStop>,
    /// Total length in km.
    pub distance_km: u64,
}

impl Route {
    pub fn source(&self) -> CityId {
        self.stops[0].city
    }

    pub fn target(&self) -> CityId {
        self.stops[self.stops.len() - 1].city
    }

    /// `true` if source and target are the same city.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }

    /// `true` if any arc on the route is under maintenance.
    pub fn has_maintenance(&self) -> bool {
        self.stops.iter().any(|s| s.under_maintenance)
    }

    /// Render as `A -> B -> C(MAINTENANCE)` using the network's city names.
    pub fn display<'a>(&'a self, network: &'a RoadNetwork) -> RouteDisplay<'a> {
        RouteDisplay { route: self, network }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Route::display`].
pub struct RouteDisplay<'a> {
    route:   &'a Route,
    network: &'a RoadNetwork,
}

impl fmt::Display for RouteDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.route.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            match self.network.city_name(stop.city) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "{}", stop.city)?,
            }
            if stop.under_maintenance {
                f.write_str("(MAINTENANCE)")?;
            }
        }
        Ok(())
    }
}

/// Rebuild the route to `target` from `table`'s predecessor links.
///
/// Each stop after the first is annotated from the directed arc
/// predecessor → stop as it currently exists in `network`; the reverse arc
/// is never consulted.  Returns `None` if `target` was not reached.
pub fn reconstruct_path(network: &RoadNetwork, table: &DistanceTable, target: CityId) -> Option<Route> {
    let cities = table.path_to(target)?;
    let distance_km = table.distance(target)?;

    let mut stops = Vec::with_capacity(cities.len());
    stops.push(RouteStop { city: cities[0], under_maintenance: false });
    for pair in cities.windows(2) {
        let under_maintenance = network
            .find_arc(pair[0], pair[1])
            .is_some_and(|road| road.under_maintenance);
        stops.push(RouteStop { city: pair[1], under_maintenance });
    }

    Some(Route { stops, distance_km })
}
