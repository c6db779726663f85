//! Query error type.

use thiserror::Error;

use nav_core::{CityId, NavError};

/// Errors produced by `nav-engine`.
///
/// An unreachable target is not an error: it shows up as an unreachable
/// entry in the [`DistanceTable`](crate::DistanceTable).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("query source {0} is not a city in this network")]
    UnknownCity(CityId),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<EngineError> for NavError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::UnknownCity(id) => NavError::UnknownCity(id),
        }
    }
}
