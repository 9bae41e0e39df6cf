//! Lock-guarded collector handle shared by producer threads

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::error::{CollectorError, Result};
use crate::processor::DataProcessor;

/// Thread-safe handle to a single [`DataProcessor`]
///
/// Clones share the same collector. Every mutation goes through the mutex;
/// once all producers have dropped their handles, [`into_inner`] hands the
/// collector back for lock-free processing.
///
/// [`into_inner`]: SharedCollector::into_inner
pub struct SharedCollector<T> {
    inner: Arc<Mutex<DataProcessor<T>>>,
}

impl<T> SharedCollector<T> {
    pub fn new() -> Self {
        Self::from_processor(DataProcessor::new())
    }

    pub fn from_processor(processor: DataProcessor<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(processor)),
        }
    }

    /// Append a single item under the lock
    pub fn add_data(&self, item: T) {
        self.inner.lock().add_data(item);
    }

    /// Append every item while holding the lock once.
    ///
    /// Items from one call stay contiguous and in iteration order, whatever
    /// other threads are doing. Returns the number of items appended.
    pub fn append_all<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut processor = self.inner.lock();
        let before = processor.len();
        processor.extend(items);
        let appended = processor.len() - before;
        debug!("Appended {} items (total {})", appended, processor.len());
        appended
    }

    /// Take the collector back once this is the last handle
    pub fn into_inner(self) -> Result<DataProcessor<T>> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| CollectorError::StillShared {
                handles: Arc::strong_count(&inner),
            })
    }
}

impl<T> Clone for SharedCollector<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for SharedCollector<T> {
    fn default() -> Self {
        Self::new()
    }
}
