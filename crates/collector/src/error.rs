//! Error types for the collector crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectorError {
    #[error("Collector is still shared by {handles} handles")]
    StillShared { handles: usize },
}

pub type Result<T> = std::result::Result<T, CollectorError>;
