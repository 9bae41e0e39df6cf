//! mdproc Collector
//!
//! Ordered in-memory store for market data:
//!
//! - [`DataProcessor`]: owns items in insertion order and processes them
//!   sequentially, isolating per-item failures
//! - [`SharedCollector`]: mutex-guarded handle that producer threads append
//!   through
//!
//! ## Flow
//!
//! ```text
//! producer-0 ─┐
//! producer-1 ─┼─ lock ─► SharedCollector ─ into_inner ─► DataProcessor::process_all
//! producer-N ─┘
//! ```

pub mod error;
pub mod processor;
pub mod shared;

pub use error::CollectorError;
pub use processor::DataProcessor;
pub use shared::SharedCollector;
