//! `nav-network`: the road network store and its loaders.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`network`] | `RoadNetwork`, `Road`, `MaintenanceReport`               |
//! | [`loader`]  | `load_map_file`, `load_map_reader`                       |
//! | [`shared`]  | `SharedNetwork` (`Arc<RwLock<RoadNetwork>>`)             |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Road`.             |

pub mod error;
pub mod loader;
pub mod network;
pub mod shared;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use loader::{load_map_file, load_map_reader};
pub use network::{MAINTENANCE_FACTOR, MaintenanceReport, Road, RoadNetwork};
pub use shared::SharedNetwork;
