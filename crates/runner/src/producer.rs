//! Producer - simulated arrival of market data
//!
//! Each producer draws one bond price and one interest rate from its own
//! RNG, then delivers the pair in a single step:
//! - under the shared collector lock, or
//! - as one message over a channel to the collecting thread

use crossbeam_channel::Sender;
use log::debug;
use mdproc_collector::SharedCollector;
use mdproc_core::{BondMarketData, InterestRateMarketData, MarketData, ValueRange};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Result, RunnerError};

/// One producer's delivery: a bond followed by an interest rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketDataPair {
    pub producer: usize,
    pub bond: BondMarketData,
    pub interest_rate: InterestRateMarketData,
}

impl MarketDataPair {
    /// Items in delivery order (bond first)
    pub fn into_items(self) -> [MarketData; 2] {
        [
            MarketData::Bond(self.bond),
            MarketData::InterestRate(self.interest_rate),
        ]
    }
}

/// Generates market data pairs from a private RNG
pub struct MarketDataProducer {
    id: usize,
    values: Uniform<f64>,
    rng: StdRng,
}

impl MarketDataProducer {
    /// Create a producer seeded from OS entropy
    pub fn new(id: usize, range: ValueRange) -> Self {
        Self {
            id,
            values: Uniform::new(range.low(), range.high()),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible runs
    pub fn with_seed(id: usize, range: ValueRange, seed: u64) -> Self {
        Self {
            id,
            values: Uniform::new(range.low(), range.high()),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Draw the next bond/interest-rate pair
    pub fn generate(&mut self) -> MarketDataPair {
        let bond = BondMarketData::new(self.values.sample(&mut self.rng));
        let interest_rate = InterestRateMarketData::new(self.values.sample(&mut self.rng));

        MarketDataPair {
            producer: self.id,
            bond,
            interest_rate,
        }
    }

    /// Generate a pair and append it to the shared collector.
    ///
    /// Generation happens before the lock is taken; the lock is held only
    /// across the two appends.
    pub fn run(&mut self, collector: &SharedCollector<MarketData>) -> usize {
        let pair = self.generate();
        let appended = collector.append_all(pair.into_items());
        debug!(
            "[producer-{}] Appended {} and {}",
            self.id, pair.bond, pair.interest_rate
        );
        appended
    }

    /// Generate a pair and hand it to the collecting thread
    pub fn run_channel(&mut self, tx: &Sender<MarketDataPair>) -> Result<()> {
        let pair = self.generate();
        tx.send(pair).map_err(|_| RunnerError::ChannelClosed(self.id))?;
        debug!(
            "[producer-{}] Sent {} and {}",
            self.id, pair.bond, pair.interest_rate
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_values_in_range() {
        let range = ValueRange::default();
        let mut producer = MarketDataProducer::with_seed(0, range, 42);

        for _ in 0..1000 {
            let pair = producer.generate();
            assert!(range.contains(pair.bond.price), "{}", pair.bond.price);
            assert!(
                range.contains(pair.interest_rate.rate),
                "{}",
                pair.interest_rate.rate
            );
        }
    }

    #[test]
    fn test_narrow_range() {
        let range = ValueRange::new(5.0, 5.5).unwrap();
        let mut producer = MarketDataProducer::new(3, range);

        let pair = producer.generate();
        assert_eq!(pair.producer, 3);
        assert!(range.contains(pair.bond.price));
        assert!(range.contains(pair.interest_rate.rate));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let range = ValueRange::default();
        let mut a = MarketDataProducer::with_seed(0, range, 7);
        let mut b = MarketDataProducer::with_seed(0, range, 7);

        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_pair_order() {
        let mut producer = MarketDataProducer::with_seed(1, ValueRange::default(), 1);
        let items = producer.generate().into_items();

        assert!(matches!(items[0], MarketData::Bond(_)));
        assert!(matches!(items[1], MarketData::InterestRate(_)));
    }

    #[test]
    fn test_run_appends_pair() {
        let collector = SharedCollector::new();
        let mut producer = MarketDataProducer::with_seed(0, ValueRange::default(), 42);

        assert_eq!(producer.run(&collector), 2);
        assert_eq!(collector.into_inner().unwrap().len(), 2);
    }

    #[test]
    fn test_run_channel_sends_pair() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut producer = MarketDataProducer::with_seed(2, ValueRange::default(), 42);

        producer.run_channel(&tx).unwrap();

        let pair = rx.try_recv().unwrap();
        assert_eq!(pair.producer, 2);
    }

    #[test]
    fn test_run_channel_closed() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut producer = MarketDataProducer::with_seed(4, ValueRange::default(), 42);

        let result = producer.run_channel(&tx);
        assert!(matches!(result, Err(RunnerError::ChannelClosed(4))));
    }
}
