//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and convert them into `NavError`
//! via `From` impls where a single error type is convenient (e.g. in a shell
//! that drives every crate).

use thiserror::Error;

use crate::CityId;

/// The top-level error type for `nav-core` and a common base for shells.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("city {0:?} not found")]
    CityNotFound(String),

    #[error("{0} is not a city in this network")]
    UnknownCity(CityId),

    #[error("no road from {from} to {to}")]
    RoadNotFound { from: CityId, to: CityId },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
