//! Plain-text listing of the whole network.

use std::fmt;

use nav_core::CityId;
use nav_network::{Road, RoadNetwork};

/// One city and its outgoing arcs in storage order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadMapLine {
    pub city:  CityId,
    pub name:  String,
    /// `(destination name, arc)` pairs, most recently added first.
    pub roads: Vec<(String, Road)>,
}

/// Snapshot of every city's outgoing roads.
///
/// `Display` renders one line per city:
///
/// ```text
/// A -> C (100 km)  B (10 km, BLOCKED)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadMap {
    pub lines: Vec<RoadMapLine>,
}

impl RoadMap {
    pub fn new(network: &RoadNetwork) -> Self {
        let name_of = |c: CityId| network.city_name(c).unwrap_or("?").to_owned();
        let lines = network
            .cities()
            .map(|(city, name)| RoadMapLine {
                city,
                name:  name.to_owned(),
                roads: network
                    .roads_from(city)
                    .map(|r| (name_of(r.to), r.clone()))
                    .collect(),
            })
            .collect();
        Self { lines }
    }
}

impl fmt::Display for RoadMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            write!(f, "{} ->", line.name)?;
            for (dest, road) in &line.roads {
                write!(f, " {dest} ({} km", road.weight_km)?;
                if road.blocked {
                    f.write_str(", BLOCKED")?;
                }
                if road.under_maintenance {
                    f.write_str(", MAINTENANCE")?;
                }
                f.write_str(") ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
