//! Market data shapes
//!
//! - Bond prices
//! - Interest rates

mod bond;
mod interest_rate;
mod market_data;

pub use bond::BondMarketData;
pub use interest_rate::InterestRateMarketData;
pub use market_data::{MarketData, MarketDataKind};
