//! GeoJSON map backend.
//!
//! Collects every reading passed to it and, on [`finish`](OutputWriter::finish),
//! writes a single `FeatureCollection` to `vehicle_map.geojson`:
//!
//! ```json
//! {
//!   "type": "FeatureCollection",
//!   "center": [36.45, -0.79],
//!   "features": [
//!     { "type": "Feature",
//!       "geometry": { "type": "Point", "coordinates": [lon, lat] },
//!       "properties": { "vehicle_id": "KBX456B", "marker_color": "red", ... } }
//!   ]
//! }
//! ```
//!
//! Coordinates follow GeoJSON order (`[lon, lat]`).  `center` is omitted
//! when there are no readings.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use vt_telemetry::{MarkerColor, Reading, map_center};

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const MAP_FILE: &str = "vehicle_map.geojson";

/// Buffers readings and writes them as map markers on `finish`.
pub struct GeoJsonWriter {
    path:     PathBuf,
    readings: Vec<Reading>,
    finished: bool,
}

impl GeoJsonWriter {
    /// Target `vehicle_map.geojson` in `dir`.  Nothing is created until
    /// `finish`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path:     dir.join(MAP_FILE),
            readings: Vec::new(),
            finished: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document `finish` would write for the readings collected so far.
    pub fn to_value(&self) -> Value {
        let features: Vec<Value> = self.readings.iter().map(feature).collect();

        let mut doc = Map::new();
        doc.insert("type".into(), json!("FeatureCollection"));
        if let Some(c) = map_center(&self.readings) {
            doc.insert("center".into(), json!([c.lon, c.lat]));
        }
        doc.insert("features".into(), Value::Array(features));
        Value::Object(doc)
    }
}

fn feature(r: &Reading) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [r.longitude, r.latitude],
        },
        "properties": {
            "vehicle_id":   r.vehicle_id.as_str(),
            "vehicle_type": r.vehicle_class.as_str(),
            "route":        r.route,
            "speed_kmph":   r.speed_kmph,
            "speed_limit":  r.speed_limit,
            "overspeeding": r.overspeeding,
            "timestamp":    r.timestamp.to_string(),
            "marker_color": MarkerColor::for_reading(r).as_str(),
            "tooltip":      r.tooltip(),
        },
    })
}

impl OutputWriter for GeoJsonWriter {
    fn write_readings(&mut self, readings: &[Reading]) -> OutputResult<()> {
        self.readings.extend_from_slice(readings);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &self.to_value())?;
        out.flush()?;
        log::debug!("wrote {} ({} markers)", self.path.display(), self.readings.len());
        Ok(())
    }
}
