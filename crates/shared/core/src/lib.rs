//! mdproc Core Domain
//!
//! Pure market data types for the mdproc workspace.
//! This crate contains no threads, no I/O, and is 100% unit testable.

pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use instruments::{BondMarketData, InterestRateMarketData, MarketData, MarketDataKind};
pub use values::{Price, Rate, ValueRange, ValueRangeError};
