//! The `OutputWriter` trait implemented by all backend writers.

use vt_telemetry::Reading;

use crate::OutputResult;

/// Trait implemented by the table, CSV, and GeoJSON writers.
pub trait OutputWriter {
    /// Append a batch of readings.  May be called more than once.
    fn write_readings(&mut self, readings: &[Reading]) -> OutputResult<()>;

    /// Flush and close all underlying outputs.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
