//! Caller-owned memoization of one generated batch.
//!
//! A dashboard session re-renders many times (every route change) but should
//! show the same simulated snapshot until the user asks for a refresh.  The
//! generator stays pure; the session holds a `BatchCache` and decides when
//! to invalidate it.

use crate::Reading;

/// Holds at most one batch.
#[derive(Debug, Default)]
pub struct BatchCache {
    batch: Option<Vec<Reading>>,
}

impl BatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached batch, running `generate` first if there is none.
    ///
    /// If `generate` fails the cache stays empty and the error is returned.
    pub fn get_or_generate<F, E>(&mut self, generate: F) -> Result<&[Reading], E>
    where
        F: FnOnce() -> Result<Vec<Reading>, E>,
    {
        let batch = match self.batch.take() {
            Some(batch) => {
                log::debug!("batch cache hit ({} readings)", batch.len());
                batch
            }
            None => generate()?,
        };
        let batch: &Vec<Reading> = self.batch.insert(batch);
        Ok(batch.as_slice())
    }

    pub fn get(&self) -> Option<&[Reading]> {
        self.batch.as_deref()
    }

    pub fn is_cached(&self) -> bool {
        self.batch.is_some()
    }

    /// Drop the cached batch so the next call regenerates.
    pub fn invalidate(&mut self) {
        self.batch = None;
    }
}
