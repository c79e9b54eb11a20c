//! `vt-output`: renderers for reading batches.
//!
//! Three backends share the [`OutputWriter`] trait:
//!
//! | Backend          | Output                                                   |
//! |------------------|----------------------------------------------------------|
//! | [`TableWriter`]  | fixed-width text table on any `io::Write`                |
//! | [`CsvWriter`]    | `readings.csv` in an output directory                    |
//! | [`GeoJsonWriter`]| `vehicle_map.geojson` (map markers + centre)             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use vt_output::{CsvWriter, OutputWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_readings(&filtered)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod table;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::GeoJsonWriter;
pub use table::TableWriter;
pub use writer::OutputWriter;
