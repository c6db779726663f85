//! `nav-engine`: graph queries over a [`RoadNetwork`](nav_network::RoadNetwork).
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`table`]    | `DistanceTable` (per-query distance + predecessor)     |
//! | [`dijkstra`] | `PathEngine` trait, `DijkstraEngine`, `shortest_paths` |
//! | [`prim`]     | `SpanningTree`, `TreeEdge`, `minimum_connectivity`     |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                       |
//!
//! # Blocked roads
//!
//! Both queries skip arcs whose `blocked` flag is set, as if the arc were
//! absent.  Neither query mutates the network, and tables are never cached:
//! a block, unblock, or maintenance change is visible to the next query.

pub mod dijkstra;
pub mod error;
pub mod prim;
pub mod table;


pub use dijkstra::{DijkstraEngine, PathEngine, shortest_paths};
pub use error::{EngineError, EngineResult};
pub use prim::{SpanningTree, TreeEdge, minimum_connectivity};
pub use table::DistanceTable;
