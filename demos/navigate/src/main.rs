//! navigate: scripted session over a road map.
//!
//! Loads a map (the bundled one by default), then walks through every report
//! the engine offers: reachability, farthest city, a trip with fuel
//! estimate, budget and fuel listings, the connector tree, and the effect of
//! blocking a road and putting one under maintenance.
//!
//! ```text
//! navigate [MAP_FILE] [CONFIG_JSON]
//! RUST_LOG=debug navigate      # show engine activity
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use nav_core::{CityId, NavConfig};
use nav_engine::minimum_connectivity;
use nav_network::{RoadNetwork, SharedNetwork, load_map_file, load_map_reader};
use nav_report::{CsvReportWriter, RoadMap, Reporter};

const DEFAULT_MAP: &str = include_str!("../data/default_map.txt");

const HOME:     &str = "Lahore";
const DEST:     &str = "Peshawar";
const BUDGET:   f64  = 6_000.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let map_arg    = args.next().map(PathBuf::from);
    let config_arg = args.next().map(PathBuf::from);

    let config = load_config(config_arg)?;
    let network = match map_arg.or_else(|| config.map_path.clone()) {
        Some(path) => load_map_file(&path)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => load_map_reader(DEFAULT_MAP.as_bytes()).context("loading bundled map")?,
    };

    println!("=== navigate - roadnav demo ===");
    println!(
        "Cities: {}  |  Roads: {}  |  Fuel: {} km/l at {} per litre",
        network.city_count(),
        network.road_count() / 2,
        config.fuel.fuel_efficiency_km_per_l,
        config.fuel.fuel_price_per_liter,
    );
    println!();

    let shared   = SharedNetwork::new(network);
    let reporter = Reporter::new(config.fuel);

    let home = shared.read(|n| n.resolve(HOME))?;
    let dest = shared.read(|n| n.resolve(DEST))?;

    // ── Read-only reports ─────────────────────────────────────────────────
    shared.read(|net| -> Result<()> {
        print!("{}", RoadMap::new(net));
        println!();

        println!("Reachable cities from {HOME}:");
        for e in reporter.reachable_cities(net, home)? {
            println!("- {} at {} km", name(net, e.city), e.distance_km);
        }
        match reporter.farthest_city(net, home)? {
            Some(e) => println!("Farthest: {} at {} km", name(net, e.city), e.distance_km),
            None => println!("No cities reachable from {HOME}."),
        }
        println!();

        print_trip(net, &reporter, home, dest)?;

        println!("Cities reachable within {BUDGET:.2}:");
        let within = reporter.cities_within_budget(net, home, BUDGET)?;
        if within.is_empty() {
            println!("No destinations within your budget.");
        }
        for e in &within {
            println!("- {} ({} km) | cost {:.2}", name(net, e.city), e.distance_km, e.cost);
        }
        println!();

        println!("Cities by fuel requirement from {HOME}:");
        let by_fuel = reporter.cities_by_fuel_ascending(net, home)?;
        for e in &by_fuel {
            println!("- {}: {:.2} litres", name(net, e.city), e.fuel_liters);
        }
        println!();

        let tree = minimum_connectivity(net, home)?;
        println!("Connector tree from {HOME}:");
        for edge in tree.edges() {
            println!("{} - {} : {} km", name(net, edge.parent), name(net, edge.child), edge.weight_km);
        }
        println!("Total cost: {} km", tree.total_cost);
        println!();

        println!("Fuel report (CSV):");
        let mut csv = CsvReportWriter::new(io::stdout());
        csv.write_fuel(net, &by_fuel)?;
        csv.into_inner()?;
        println!();
        Ok(())
    })?;

    // ── Mutations ─────────────────────────────────────────────────────────
    let rawalpindi = shared.read(|n| n.resolve("Rawalpindi"))?;
    let islamabad  = shared.read(|n| n.resolve("Islamabad"))?;

    shared.write(|n| n.block_road(islamabad, dest))?;
    println!("Blocked Islamabad <-> {DEST}.");
    shared.read(|net| print_trip(net, &reporter, home, dest))?;

    let report = shared.write(|n| n.apply_maintenance(islamabad, rawalpindi))?;
    println!(
        "Maintenance on Islamabad -> Rawalpindi: {} km -> {} km",
        report.original_km, report.adjusted_km
    );
    shared.read(|net| print_trip(net, &reporter, home, dest))?;

    shared.write(|n| n.unblock_road(islamabad, dest))?;
    println!("Unblocked Islamabad <-> {DEST}.");
    shared.read(|net| print_trip(net, &reporter, home, dest))?;

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<NavConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => NavConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn print_trip(net: &RoadNetwork, reporter: &Reporter, from: CityId, to: CityId) -> Result<()> {
    match reporter.trip(net, from, to)? {
        Some(trip) => {
            println!("Shortest distance: {} km", trip.distance_km);
            println!("Path: {}", trip.route.display(net));
            println!("Estimated fuel: {:.2} litres  |  cost {:.2}", trip.fuel_liters, trip.cost);
        }
        None => println!("No available route due to blocked roads."),
    }
    println!();
    Ok(())
}

fn name(net: &RoadNetwork, city: CityId) -> &str {
    net.city_name(city).unwrap_or("?")
}
