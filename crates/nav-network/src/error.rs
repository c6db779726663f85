//! Network-store error type.

use thiserror::Error;

use nav_core::{CityId, NavError};

/// Errors produced by `nav-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("city {0:?} not found")]
    CityNotFound(String),

    #[error("{0} is not a city in this network")]
    UnknownCity(CityId),

    #[error("no road from {from} to {to}")]
    RoadNotFound { from: CityId, to: CityId },

    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

impl From<NetworkError> for NavError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::CityNotFound(name)       => NavError::CityNotFound(name),
            NetworkError::UnknownCity(id)          => NavError::UnknownCity(id),
            NetworkError::RoadNotFound { from, to } => NavError::RoadNotFound { from, to },
            NetworkError::Parse(msg)               => NavError::Parse(msg),
            NetworkError::Io(err)                  => NavError::Io(err),
        }
    }
}
