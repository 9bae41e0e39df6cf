use serde::{Deserialize, Serialize};

use crate::values::{DISPLAY_PRECISION, Rate, format_significant};

/// Interest rate observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRateMarketData {
    pub rate: Rate,
}

impl InterestRateMarketData {
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// One-line processing message for this observation
    pub fn summary(&self) -> String {
        format!(
            "Processing Interest Rate Market Data: Rate = {}",
            format_significant(self.rate, DISPLAY_PRECISION)
        )
    }
}

impl std::fmt::Display for InterestRateMarketData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InterestRate(rate={})",
            format_significant(self.rate, DISPLAY_PRECISION)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_summary() {
        let rate = InterestRateMarketData::new(3.25);
        assert_eq!(
            rate.summary(),
            "Processing Interest Rate Market Data: Rate = 3.25"
        );
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(
            format!("{}", InterestRateMarketData::new(4.0)),
            "InterestRate(rate=4)"
        );
    }
}
