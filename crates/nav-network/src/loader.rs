//! Map-file loader.
//!
//! # File format
//!
//! ```text
//! 3
//! Lahore
//! Islamabad
//! Multan
//! 2
//! Lahore Islamabad 380
//! Lahore Multan 340
//! ```
//!
//! 1. A line with the city count `N`.
//! 2. `N` lines, one city name per line (a name may contain spaces).
//! 3. The road count `M`.
//! 4. `M` whitespace-separated `source destination weight` triples.  Each
//!    triple becomes a two-way road.
//!
//! Triples that name an unknown city are skipped with a warning, matching
//! the behavior shells expect from hand-edited maps.  Structural problems
//! (missing counts, too few names or triples, non-numeric weights) are
//! [`NetworkError::Parse`] errors.

use std::io::Read;
use std::path::Path;

use crate::{NetworkError, NetworkResult, RoadNetwork};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoadNetwork`] from a map file.
pub fn load_map_file(path: &Path) -> NetworkResult<RoadNetwork> {
    let file = std::fs::File::open(path)?;
    let network = load_map_reader(file)?;
    log::info!(
        "loaded {} cities and {} arcs from {}",
        network.city_count(),
        network.road_count(),
        path.display()
    );
    Ok(network)
}

/// Like [`load_map_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for maps embedded in a
/// binary.
pub fn load_map_reader<R: Read>(mut reader: R) -> NetworkResult<RoadNetwork> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut network = RoadNetwork::new();
    let mut lines = text.lines().enumerate().skip_while(|(_, l)| l.trim().is_empty());

    // ── Cities ────────────────────────────────────────────────────────────
    let (line_no, header) = lines
        .next()
        .ok_or_else(|| NetworkError::Parse("empty map: missing city count".into()))?;
    let city_count: usize = parse_count(header, line_no, "city count")?;

    for i in 0..city_count {
        let (_, name) = lines.next().ok_or_else(|| {
            NetworkError::Parse(format!("expected {city_count} city names, found {i}"))
        })?;
        network.add_city(name.trim());
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    // The remainder is a free-form token stream.
    let mut tokens = lines.flat_map(|(n, l)| l.split_whitespace().map(move |t| (n, t)));

    let Some((line_no, token)) = tokens.next() else {
        // A map with cities and no road section is a valid empty road set.
        return Ok(network);
    };
    let road_count: usize = parse_count(token, line_no, "road count")?;

    for i in 0..road_count {
        let mut field = |what: &str| {
            tokens.next().ok_or_else(|| {
                NetworkError::Parse(format!("road {}: missing {what}", i + 1))
            })
        };
        let (_, src)       = field("source city")?;
        let (_, dst)       = field("destination city")?;
        let (n, weight_tk) = field("weight")?;

        let weight: u32 = weight_tk.parse().map_err(|_| {
            NetworkError::Parse(format!(
                "line {}: invalid weight {weight_tk:?}: expected a non-negative integer",
                n + 1
            ))
        })?;

        match (network.find_city(src), network.find_city(dst)) {
            (Some(a), Some(b)) => network.add_two_way_road(a, b, weight)?,
            _ => log::warn!("skipping road {src} - {dst}: unknown city"),
        }
    }

    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_count(s: &str, line_no: usize, what: &str) -> NetworkResult<usize> {
    s.trim().parse::<usize>().map_err(|_| {
        NetworkError::Parse(format!(
            "line {}: invalid {what} {:?}: expected a non-negative integer",
            line_no + 1,
            s.trim()
        ))
    })
}
