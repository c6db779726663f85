//! `nav-core`: foundational types for the `roadnav` routing engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`ids`]      | `CityId`                                   |
//! | [`config`]   | `FuelConfig`, `NavConfig`                  |
//! | [`error`]    | `NavError`, `NavResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration. |

pub mod config;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FuelConfig, NavConfig};
pub use error::{NavError, NavResult};
pub use ids::CityId;
