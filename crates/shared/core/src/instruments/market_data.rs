use serde::{Deserialize, Serialize};

use super::{BondMarketData, InterestRateMarketData};

/// Kind of a market data observation, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketDataKind {
    Bond,
    InterestRate,
}

impl std::fmt::Display for MarketDataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketDataKind::Bond => write!(f, "bond"),
            MarketDataKind::InterestRate => write!(f, "interest-rate"),
        }
    }
}

/// Enumeration of all supported market data shapes
///
/// The set is closed: every consumer matches on it exhaustively instead of
/// going through an open trait object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarketData {
    /// Bond price observation
    Bond(BondMarketData),
    /// Interest rate observation
    InterestRate(InterestRateMarketData),
}

impl MarketData {
    pub fn bond(price: f64) -> Self {
        MarketData::Bond(BondMarketData::new(price))
    }

    pub fn interest_rate(rate: f64) -> Self {
        MarketData::InterestRate(InterestRateMarketData::new(rate))
    }

    pub fn kind(&self) -> MarketDataKind {
        match self {
            MarketData::Bond(_) => MarketDataKind::Bond,
            MarketData::InterestRate(_) => MarketDataKind::InterestRate,
        }
    }

    /// The single numeric field carried by the observation
    pub fn value(&self) -> f64 {
        match self {
            MarketData::Bond(b) => b.price,
            MarketData::InterestRate(r) => r.rate,
        }
    }

    /// One-line processing message for this observation
    pub fn summary(&self) -> String {
        match self {
            MarketData::Bond(b) => b.summary(),
            MarketData::InterestRate(r) => r.summary(),
        }
    }
}

impl From<BondMarketData> for MarketData {
    fn from(b: BondMarketData) -> Self {
        MarketData::Bond(b)
    }
}

impl From<InterestRateMarketData> for MarketData {
    fn from(r: InterestRateMarketData) -> Self {
        MarketData::InterestRate(r)
    }
}

impl std::fmt::Display for MarketData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketData::Bond(b) => std::fmt::Display::fmt(b, f),
            MarketData::InterestRate(r) => std::fmt::Display::fmt(r, f),
        }
    }
}
