//! Error types for nav-report.

use thiserror::Error;

use nav_engine::EngineError;

/// Errors that can occur while building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
