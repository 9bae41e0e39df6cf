//! Simulation - launches producers, joins them, processes the result
//!
//! Linear sequence, no branching:
//! - spawn one OS thread per producer
//! - wait for every thread to finish
//! - process the fully populated collector exactly once

use std::io::Write;
use std::thread::{self, JoinHandle};

use log::{debug, info};
use mdproc_collector::{DataProcessor, SharedCollector};
use mdproc_core::{MarketData, ValueRange};

use crate::error::{Result, RunnerError};
use crate::producer::{MarketDataPair, MarketDataProducer};

/// How producers hand their pairs to the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Append through a mutex-guarded shared collector
    #[default]
    SharedLock,
    /// Send pairs over a channel to the driver thread, which owns the collector
    Channel,
}

/// Simulation configuration
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of producer threads
    pub producers: usize,
    /// Range generated values are drawn from
    pub value_range: ValueRange,
    /// Delivery path from producers to the collector
    pub delivery: Delivery,
    /// Base RNG seed; producer `i` uses `seed + i`. Entropy when `None`
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            producers: 5,
            value_range: ValueRange::default(),
            delivery: Delivery::default(),
            seed: None,
        }
    }
}

/// Simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationResults {
    /// Producers that ran to completion
    pub producers: usize,
    /// Items held by the collector when processing started
    pub items: usize,
}

/// Concurrent market data simulation
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a new simulation with default configuration
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }

    /// Create a new simulation with custom configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        if config.producers == 0 {
            return Err(RunnerError::InvalidConfig(
                "at least one producer is required".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn producer(&self, id: usize) -> MarketDataProducer {
        match self.config.seed {
            Some(seed) => MarketDataProducer::with_seed(
                id,
                self.config.value_range,
                seed.wrapping_add(id as u64),
            ),
            None => MarketDataProducer::new(id, self.config.value_range),
        }
    }

    /// Spawn a producer thread named `producer-<id>`
    fn spawn<F>(id: usize, work: F) -> Result<JoinHandle<Result<()>>>
    where
        F: FnOnce() -> Result<()> + Send + 'static,
    {
        thread::Builder::new()
            .name(format!("producer-{}", id))
            .spawn(work)
            .map_err(|source| RunnerError::Spawn {
                producer: id,
                source,
            })
    }

    /// Wait for every producer, then report the first failure if any
    fn join_all(handles: Vec<JoinHandle<Result<()>>>) -> Result<()> {
        let mut first_error = None;

        for (id, handle) in handles.into_iter().enumerate() {
            let outcome = handle
                .join()
                .unwrap_or_else(|_| Err(RunnerError::ProducerPanicked(id)));
            if let Err(e) = outcome {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn collect_locked(&self) -> Result<DataProcessor<MarketData>> {
        let producers = self.config.producers;
        let collector =
            SharedCollector::from_processor(DataProcessor::with_capacity(producers * 2));

        let mut handles = Vec::with_capacity(producers);
        for id in 0..producers {
            let mut producer = self.producer(id);
            let collector = collector.clone();
            handles.push(Self::spawn(id, move || {
                producer.run(&collector);
                Ok(())
            })?);
        }

        Self::join_all(handles)?;
        Ok(collector.into_inner()?)
    }

    fn collect_channel(&self) -> Result<DataProcessor<MarketData>> {
        let producers = self.config.producers;
        let (tx, rx) = crossbeam_channel::unbounded::<MarketDataPair>();

        let mut handles = Vec::with_capacity(producers);
        for id in 0..producers {
            let mut producer = self.producer(id);
            let tx = tx.clone();
            handles.push(Self::spawn(id, move || producer.run_channel(&tx))?);
        }
        // Only producers hold senders now; the loop below ends when they finish
        drop(tx);

        let mut processor = DataProcessor::with_capacity(producers * 2);
        for pair in rx.iter() {
            debug!("Received pair from producer-{}", pair.producer);
            processor.extend(pair.into_items());
        }

        Self::join_all(handles)?;
        Ok(processor)
    }

    /// Run every producer to completion and return the populated collector
    pub fn collect(&self) -> Result<DataProcessor<MarketData>> {
        info!(
            "Launching {} producers ({:?} delivery, values in {})",
            self.config.producers, self.config.delivery, self.config.value_range
        );

        let processor = match self.config.delivery {
            Delivery::SharedLock => self.collect_locked()?,
            Delivery::Channel => self.collect_channel()?,
        };

        info!("All producers joined, collected {} items", processor.len());
        Ok(processor)
    }

    /// Collect, then process every item once, writing messages to `out`
    pub fn run(&self, out: &mut dyn Write) -> Result<SimulationResults> {
        let processor = self.collect()?;
        let results = SimulationResults {
            producers: self.config.producers,
            items: processor.len(),
        };

        processor.process_all(out);

        info!(
            "Simulation finished: {} producers, {} items",
            results.producers, results.items
        );
        Ok(results)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
