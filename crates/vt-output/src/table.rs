//! Plain-text table backend for terminals.
//!
//! Overspeeding rows are prefixed with `!` where a graphical dashboard would
//! highlight them.

use std::io::Write;

use vt_telemetry::Reading;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes a fixed-width table to any `io::Write` (stdout, a file, a `Vec<u8>`).
///
/// The header row is written before the first batch, so a writer that never
/// receives readings produces no output at all.
pub struct TableWriter<W: Write> {
    out:            W,
    header_written: bool,
    finished:       bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, header_written: false, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> OutputResult<()> {
        writeln!(
            self.out,
            "  {:<10} {:<12} {:>5} {:>5}  {:<20} {:<19}  {}",
            "vehicle_id", "vehicle_type", "speed", "limit", "route", "timestamp", "overspeeding",
        )?;
        self.header_written = true;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_readings(&mut self, readings: &[Reading]) -> OutputResult<()> {
        if readings.is_empty() {
            return Ok(());
        }
        if !self.header_written {
            self.write_header()?;
        }
        for r in readings {
            writeln!(
                self.out,
                "{} {:<10} {:<12} {:>5} {:>5}  {:<20} {:<19}  {}",
                if r.overspeeding { '!' } else { ' ' },
                r.vehicle_id.as_str(),
                r.vehicle_class.as_str(),
                r.speed_kmph,
                r.speed_limit,
                r.route,
                r.timestamp.to_string(),
                r.overspeeding,
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
