use mdproc_core::MarketDataKind;
use thiserror::Error;

/// Failure of a single item's processing step
///
/// These never abort a batch: the collector logs them and moves on.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid {kind} value: {value}")]
    InvalidValue { kind: MarketDataKind, value: f64 },

    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("Processing rejected: {0}")]
    Rejected(String),

    #[error("Processing panicked: {0}")]
    Panicked(String),
}

pub type ProcessResult<T> = std::result::Result<T, ProcessError>;
