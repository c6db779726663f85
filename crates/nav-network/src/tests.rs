//! Unit tests for nav-network.
//!
//! All tests use hand-built networks or in-memory map text.

#[cfg(test)]
mod helpers {
    use nav_core::CityId;
    use crate::RoadNetwork;

    /// Three cities with two-way roads A-B:10, B-C:5, A-C:100.
    pub fn triangle() -> (RoadNetwork, [CityId; 3]) {
        let mut net = RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        let c = net.add_city("C");
        net.add_two_way_road(a, b, 10).unwrap();
        net.add_two_way_road(b, c, 5).unwrap();
        net.add_two_way_road(a, c, 100).unwrap();
        (net, [a, b, c])
    }
}

// ── Cities ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cities {
    use nav_core::CityId;
    use crate::{NetworkError, RoadNetwork};

    #[test]
    fn sequential_ids() {
        let mut net = RoadNetwork::new();
        assert!(net.is_empty());
        assert_eq!(net.add_city("Lahore"), CityId(0));
        assert_eq!(net.add_city("Multan"), CityId(1));
        assert_eq!(net.city_count(), 2);
        assert_eq!(net.city_name(CityId(1)), Some("Multan"));
        assert_eq!(net.city_name(CityId(2)), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut net = RoadNetwork::new();
        let first  = net.add_city("Springfield");
        let second = net.add_city("Springfield");
        assert_ne!(first, second);
        assert_eq!(net.city_count(), 2);
        assert_eq!(net.find_city("Springfield"), Some(first));
    }

    #[test]
    fn lookup_is_exact() {
        let mut net = RoadNetwork::new();
        net.add_city("Karachi");
        assert_eq!(net.find_city("karachi"), None);
        assert_eq!(net.find_city("Karachi "), None);
        assert!(matches!(net.resolve("Quetta"), Err(NetworkError::CityNotFound(n)) if n == "Quetta"));
    }

    #[test]
    fn cities_in_id_order() {
        let (net, _) = super::helpers::triangle();
        let names: Vec<&str> = net.cities().map(|(_, n)| n).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}

// ── Roads ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roads {
    use nav_core::CityId;
    use crate::{NetworkError, RoadNetwork};

    #[test]
    fn two_way_road_adds_two_arcs() {
        let (net, [a, b, c]) = super::helpers::triangle();
        assert_eq!(net.road_count(), 6);
        assert_eq!(net.out_degree(a), 2);
        assert_eq!(net.find_arc(a, b).unwrap().weight_km, 10);
        assert_eq!(net.find_arc(b, a).unwrap().weight_km, 10);
        assert_eq!(net.find_arc(c, a).unwrap().weight_km, 100);
    }

    #[test]
    fn storage_order_is_newest_first() {
        let (net, [a, b, c]) = super::helpers::triangle();
        let dests: Vec<CityId> = net.roads_from(a).map(|r| r.to).collect();
        assert_eq!(dests, vec![c, b]);
    }

    #[test]
    fn find_arc_returns_newest_parallel_arc() {
        let mut net = RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        net.add_road(a, b, 50).unwrap();
        net.add_road(a, b, 20).unwrap();
        assert_eq!(net.find_arc(a, b).unwrap().weight_km, 20);
    }

    #[test]
    fn directed_road_has_no_return_arc() {
        let mut net = RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        net.add_road(a, b, 7).unwrap();
        assert!(net.find_arc(a, b).is_some());
        assert!(net.find_arc(b, a).is_none());
    }

    #[test]
    fn unknown_city_rejected() {
        let mut net = RoadNetwork::new();
        let a = net.add_city("A");
        let err = net.add_road(a, CityId(9), 1).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownCity(CityId(9))));
        assert_eq!(net.road_count(), 0);
    }

    #[test]
    fn roads_from_unknown_city_is_empty() {
        let (net, _) = super::helpers::triangle();
        assert_eq!(net.roads_from(CityId(99)).count(), 0);
        assert!(net.find_arc(CityId(99), CityId(0)).is_none());
    }

    #[test]
    fn new_arcs_start_clear() {
        let (net, [a, b, _]) = super::helpers::triangle();
        let road = net.find_arc(a, b).unwrap();
        assert!(!road.blocked);
        assert!(!road.under_maintenance);
    }
}

// ── Blocking ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod blocking {
    use crate::NetworkError;

    #[test]
    fn set_blocked_is_one_directional() {
        let (mut net, [_, b, c]) = super::helpers::triangle();
        assert!(net.set_blocked(b, c, true));
        assert!(net.find_arc(b, c).unwrap().blocked);
        assert!(!net.find_arc(c, b).unwrap().blocked);
    }

    #[test]
    fn set_blocked_missing_arc_is_silent() {
        let mut net = crate::RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        assert!(!net.set_blocked(a, b, true));
        assert_eq!(net.road_count(), 0);
    }

    #[test]
    fn block_and_unblock_both_directions() {
        let (mut net, [a, b, _]) = super::helpers::triangle();
        net.block_road(a, b).unwrap();
        assert!(net.find_arc(a, b).unwrap().blocked);
        assert!(net.find_arc(b, a).unwrap().blocked);

        net.unblock_road(b, a).unwrap();
        assert!(!net.find_arc(a, b).unwrap().blocked);
        assert!(!net.find_arc(b, a).unwrap().blocked);
    }

    #[test]
    fn block_missing_road_is_not_found() {
        let mut net = crate::RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        assert!(matches!(net.block_road(a, b), Err(NetworkError::RoadNotFound { .. })));
    }
}

// ── Maintenance ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod maintenance {
    use crate::NetworkError;

    #[test]
    fn weight_scaled_and_truncated() {
        let (mut net, [a, b, _]) = super::helpers::triangle();
        let report = net.apply_maintenance(a, b).unwrap();
        assert_eq!(report.original_km, 10);
        assert_eq!(report.adjusted_km, 13);

        let road = net.find_arc(a, b).unwrap();
        assert_eq!(road.weight_km, 13);
        assert!(road.under_maintenance);
    }

    #[test]
    fn truncates_fractional_part() {
        let (mut net, [_, b, c]) = super::helpers::triangle();
        // 5 * 1.3 = 6.5 → 6
        assert_eq!(net.apply_maintenance(b, c).unwrap().adjusted_km, 6);
    }

    #[test]
    fn reverse_arc_untouched() {
        let (mut net, [a, b, _]) = super::helpers::triangle();
        net.apply_maintenance(a, b).unwrap();
        let back = net.find_arc(b, a).unwrap();
        assert_eq!(back.weight_km, 10);
        assert!(!back.under_maintenance);
    }

    #[test]
    fn missing_arc_is_not_found() {
        let mut net = crate::RoadNetwork::new();
        let a = net.add_city("A");
        let b = net.add_city("B");
        assert!(matches!(
            net.apply_maintenance(a, b),
            Err(NetworkError::RoadNotFound { from, to }) if from == a && to == b
        ));
    }

    #[test]
    fn repeated_maintenance_compounds() {
        let (mut net, [a, _, c]) = super::helpers::triangle();
        net.apply_maintenance(a, c).unwrap(); // 100 → 130
        let second = net.apply_maintenance(a, c).unwrap(); // 130 → 169
        assert_eq!(second.original_km, 130);
        assert_eq!(second.adjusted_km, 169);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{NetworkError, load_map_reader};

    const MAP: &str = "\
4
Lahore
Islamabad
Multan
Dera Ghazi Khan
3
Lahore Islamabad 380
Lahore Multan 340
Multan Quetta 620
";

    #[test]
    fn loads_cities_and_two_way_roads() {
        let net = load_map_reader(Cursor::new(MAP)).unwrap();
        assert_eq!(net.city_count(), 4);
        assert_eq!(net.city_name(nav_core::CityId(3)), Some("Dera Ghazi Khan"));

        let lahore = net.find_city("Lahore").unwrap();
        let multan = net.find_city("Multan").unwrap();
        assert_eq!(net.find_arc(lahore, multan).unwrap().weight_km, 340);
        assert_eq!(net.find_arc(multan, lahore).unwrap().weight_km, 340);
    }

    #[test]
    fn unknown_city_triples_skipped() {
        let net = load_map_reader(Cursor::new(MAP)).unwrap();
        // Quetta is not in the city list: 2 roads → 4 arcs.
        assert_eq!(net.road_count(), 4);
    }

    #[test]
    fn triples_may_span_lines() {
        let text = "2\nA\nB\n1\nA\nB 9\n";
        let net = load_map_reader(Cursor::new(text)).unwrap();
        assert_eq!(net.road_count(), 2);
    }

    #[test]
    fn missing_road_section_is_empty() {
        let net = load_map_reader(Cursor::new("2\nA\nB\n")).unwrap();
        assert_eq!(net.city_count(), 2);
        assert_eq!(net.road_count(), 0);
    }

    #[test]
    fn empty_input_is_parse_error() {
        assert!(matches!(load_map_reader(Cursor::new("")), Err(NetworkError::Parse(_))));
    }

    #[test]
    fn bad_city_count() {
        let err = load_map_reader(Cursor::new("many\nA\n")).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(msg) if msg.contains("city count")));
    }

    #[test]
    fn too_few_city_names() {
        let err = load_map_reader(Cursor::new("3\nA\nB\n")).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn truncated_triple() {
        let err = load_map_reader(Cursor::new("2\nA\nB\n1\nA B\n")).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(msg) if msg.contains("weight")));
    }

    #[test]
    fn negative_weight_rejected() {
        let err = load_map_reader(Cursor::new("2\nA\nB\n1\nA B -4\n")).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(msg) if msg.contains("invalid weight")));
    }
}

// ── Shared handle ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod shared {
    use std::thread;

    use crate::SharedNetwork;

    #[test]
    fn writes_visible_to_later_reads() {
        let (net, [a, b, _]) = super::helpers::triangle();
        let shared = SharedNetwork::new(net);

        shared.write(|n| n.block_road(a, b)).unwrap();
        assert!(shared.read(|n| n.find_arc(a, b).unwrap().blocked));
    }

    #[test]
    fn snapshot_is_detached() {
        let (net, [a, b, _]) = super::helpers::triangle();
        let shared = SharedNetwork::from(net);
        let before = shared.snapshot();

        shared.write(|n| n.apply_maintenance(a, b)).unwrap();
        assert_eq!(before.find_arc(a, b).unwrap().weight_km, 10);
        assert_eq!(shared.read(|n| n.find_arc(a, b).unwrap().weight_km), 13);
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let (net, [a, b, c]) = super::helpers::triangle();
        let shared = SharedNetwork::new(net);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    if i == 0 {
                        shared.write(|n| n.add_city("D"));
                    }
                    shared.read(|n| n.find_arc(a, b).is_some() && n.find_arc(b, c).is_some())
                })
            })
            .collect();

        for h in handles {
            assert!(h.join().unwrap());
        }
        assert_eq!(shared.read(|n| n.city_count()), 4);
    }
}
