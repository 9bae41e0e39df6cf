//! mdproc Ports
//!
//! Port definitions (traits) for the mdproc workspace.
//! These define the boundary between the market data domain and the
//! collector that drives processing.

mod error;
mod market_data;
mod process;

pub use error::{ProcessError, ProcessResult};
pub use process::Process;
