//! `nav-report`: human-facing summaries built on top of engine queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`route`]    | `Route`, `RouteStop`, `reconstruct_path`                  |
//! | [`reporter`] | `Reporter` (budget, fuel, reachability, trip summaries)   |
//! | [`road_map`] | `RoadMap` listing of every city's outgoing roads          |
//! | [`export`]   | `CsvReportWriter`                                         |
//! | [`error`]    | `ReportError`, `ReportResult<T>`                          |
//!
//! # Empty results
//!
//! A filter that matches nothing returns an empty `Vec`, and an unreachable
//! target returns `None`.  Only an unknown source city or a failed write is
//! an error.

pub mod error;
pub mod export;
pub mod reporter;
pub mod road_map;
pub mod route;


pub use error::{ReportError, ReportResult};
pub use export::CsvReportWriter;
pub use reporter::{BudgetEntry, FuelEntry, ReachableEntry, Reporter, TripSummary};
pub use road_map::{RoadMap, RoadMapLine};
pub use route::{Route, RouteStop, reconstruct_path};
