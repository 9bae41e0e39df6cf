use serde::{Deserialize, Serialize};

use crate::values::{DISPLAY_PRECISION, Price, format_significant};

/// Price observation for a bond
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondMarketData {
    pub price: Price,
}

impl BondMarketData {
    pub fn new(price: Price) -> Self {
        Self { price }
    }

    /// One-line processing message for this observation
    pub fn summary(&self) -> String {
        format!(
            "Processing Bond Market Data: Price = {}",
            format_significant(self.price, DISPLAY_PRECISION)
        )
    }
}

impl std::fmt::Display for BondMarketData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bond(price={})",
            format_significant(self.price, DISPLAY_PRECISION)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_summary() {
        let bond = BondMarketData::new(42.5);
        assert_eq!(bond.summary(), "Processing Bond Market Data: Price = 42.5");
    }

    #[test]
    fn test_bond_summary_precision() {
        let bond = BondMarketData::new(57.123456789);
        assert_eq!(bond.summary(), "Processing Bond Market Data: Price = 57.1235");
    }

    #[test]
    fn test_bond_display() {
        assert_eq!(format!("{}", BondMarketData::new(10.0)), "Bond(price=10)");
    }
}
