//! CSV output backend.
//!
//! Creates `readings.csv` in the configured output directory, one row per
//! reading.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use vt_telemetry::Reading;

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const READINGS_FILE: &str = "readings.csv";

pub const HEADERS: [&str; 9] = [
    "vehicle_id",
    "vehicle_type",
    "speed_kmph",
    "speed_limit",
    "route",
    "timestamp",
    "overspeeding",
    "latitude",
    "longitude",
];

/// Writes readings to a CSV file.
pub struct CsvWriter {
    readings: Writer<File>,
    path:     PathBuf,
    finished: bool,
}

impl CsvWriter {
    /// Create `readings.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(READINGS_FILE);
        let mut readings = Writer::from_path(&path)?;
        readings.write_record(HEADERS)?;
        Ok(Self { readings, path, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for CsvWriter {
    fn write_readings(&mut self, rows: &[Reading]) -> OutputResult<()> {
        for row in rows {
            self.readings.write_record(&[
                row.vehicle_id.to_string(),
                row.vehicle_class.to_string(),
                row.speed_kmph.to_string(),
                row.speed_limit.to_string(),
                row.route.clone(),
                row.timestamp.to_string(),
                row.overspeeding.to_string(),
                format!("{:.6}", row.latitude),
                format!("{:.6}", row.longitude),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.readings.flush()?;
        log::debug!("wrote {}", self.path.display());
        Ok(())
    }
}
