//! Ordered, owning collector of processable items

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error, info};
use mdproc_core::MarketData;
use mdproc_ports::{Process, ProcessError};

/// Owns every item appended to it, in insertion order
///
/// Items are never deduplicated or dropped before the collector itself.
#[derive(Debug)]
pub struct DataProcessor<T = MarketData> {
    items: Vec<T>,
}

impl<T> DataProcessor<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append an item at the end of the sequence
    pub fn add_data(&mut self, item: T) {
        self.items.push(item);
        debug!("Collected item #{}", self.items.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for DataProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DataProcessor<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_data(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a DataProcessor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Process> DataProcessor<T> {
    /// Process every item in insertion order.
    ///
    /// A failing item (error or panic) is logged and skipped; it never stops
    /// the items after it from being processed.
    pub fn process_all(&self, out: &mut dyn Write) {
        let mut failed = 0usize;

        for (index, item) in self.items.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| item.process(&mut *out)))
                .unwrap_or_else(|payload| {
                    Err(ProcessError::Panicked(panic_message(&*payload)))
                });

            if let Err(e) = outcome {
                failed += 1;
                error!(
                    "Exception while processing market data item #{}: {}",
                    index, e
                );
            }
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush processing output: {}", e);
        }

        info!("Processed {} items ({} failed)", self.items.len(), failed);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
