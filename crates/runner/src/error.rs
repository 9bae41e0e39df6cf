//! Error types for the runner crate
//!
//! Everything here is fatal: the driver stops and the binary exits non-zero.

use mdproc_collector::CollectorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to spawn producer {producer}: {source}")]
    Spawn {
        producer: usize,
        source: std::io::Error,
    },

    #[error("Producer {0} panicked")]
    ProducerPanicked(usize),

    #[error("Producer {0} could not deliver: channel closed")]
    ChannelClosed(usize),

    #[error("Collector error: {0}")]
    Collector(#[from] CollectorError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
