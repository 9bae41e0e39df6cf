//! mdproc Runner - Concurrent Market Data Simulation
//!
//! Orchestrates the whole program:
//!
//! - **Producer**: draws one bond price and one interest rate, delivers them
//!   as an adjacent pair
//! - **Simulation**: launches producers on OS threads, joins them, then
//!   processes the collector once
//!
//! ## Architecture
//!
//! ```text
//!  ┌────────────┐ ┌────────────┐       ┌────────────┐
//!  │ producer-0 │ │ producer-1 │  ...  │ producer-N │
//!  └─────┬──────┘ └─────┬──────┘       └─────┬──────┘
//!        │ (bond, rate) │                    │
//!        └──────────────┼────────────────────┘
//!                       ▼
//!          ┌─────────────────────────┐
//!          │ SharedCollector (mutex) │   or a channel to the driver thread
//!          └────────────┬────────────┘
//!                       │ join all
//!                       ▼
//!          ┌─────────────────────────┐
//!          │ DataProcessor           │
//!          │   process_all → stdout  │
//!          └─────────────────────────┘
//! ```

pub mod error;
pub mod producer;
pub mod simulation;

// Re-export main types
pub use error::RunnerError;
pub use producer::{MarketDataPair, MarketDataProducer};
pub use simulation::{Delivery, Simulation, SimulationConfig, SimulationResults};
