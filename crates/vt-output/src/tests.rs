//! Integration tests for vt-output.

use vt_core::Timestamp;
use vt_registry::Registry;
use vt_telemetry::Reading;

fn demo() -> Registry {
    Registry::kenya_demo().unwrap()
}

fn reading(registry: &Registry, id: &str, speed_kmph: u32) -> Reading {
    let v = registry.get(id).unwrap();
    Reading::classify(
        v,
        registry.base_coordinate(&v.assigned_route),
        speed_kmph,
        "2024-03-09 14:05:07".parse::<Timestamp>().unwrap(),
        registry.resolve_speed_limit(id).unwrap(),
    )
}

fn sample() -> Vec<Reading> {
    let r = demo();
    vec![reading(&r, "KDA123A", 68), reading(&r, "KBX456B", 65)]
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, HEADERS, READINGS_FILE};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(READINGS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADERS);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_readings(&sample()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(w.path()).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "KDA123A");
        assert_eq!(&rows[0][1], "private_car");
        assert_eq!(&rows[0][3], "70");
        assert_eq!(&rows[0][6], "false");
        assert_eq!(&rows[1][0], "KBX456B");
        assert_eq!(&rows[1][2], "65");
        assert_eq!(&rows[1][4], "Nakuru Road");
        assert_eq!(&rows[1][5], "2024-03-09 14:05:07");
        assert_eq!(&rows[1][6], "true");
        assert_eq!(&rows[1][7], "-0.303100");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod table_tests {
    use super::*;
    use crate::table::TableWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn marks_overspeeding_rows() {
        let mut w = TableWriter::new(Vec::new());
        w.write_readings(&sample()).unwrap();
        w.finish().unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("vehicle_id"));
        assert!(lines[0].contains("overspeeding"));
        assert!(lines[1].starts_with("  KDA123A"));
        assert!(lines[1].ends_with("false"));
        assert!(lines[2].starts_with("! KBX456B"));
        assert!(lines[2].contains("Nakuru Road"));
        assert!(lines[2].ends_with("true"));
    }

    #[test]
    fn header_written_once() {
        let mut w = TableWriter::new(Vec::new());
        let batch = sample();
        w.write_readings(&batch[..1]).unwrap();
        w.write_readings(&batch[1..]).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text.matches("vehicle_id").count(), 1);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let mut w = TableWriter::new(Vec::new());
        w.write_readings(&[]).unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }
}

#[cfg(test)]
mod geojson_tests {
    use serde_json::Value;

    use super::*;
    use crate::geojson::{GeoJsonWriter, MAP_FILE};
    use crate::writer::OutputWriter;

    #[test]
    fn features_and_center() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = GeoJsonWriter::new(dir.path());
        w.write_readings(&sample()).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(MAP_FILE)).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["type"], "FeatureCollection");

        let features = doc["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        let truck = &features[1];
        let coords = truck["geometry"]["coordinates"].as_array().unwrap();
        assert!((coords[0].as_f64().unwrap() - 36.08).abs() < 1e-9);
        assert!((coords[1].as_f64().unwrap() + 0.3031).abs() < 1e-9);
        assert_eq!(truck["properties"]["vehicle_id"], "KBX456B");
        assert_eq!(truck["properties"]["marker_color"], "red");
        assert_eq!(truck["properties"]["speed_limit"], 60);
        assert_eq!(features[0]["properties"]["marker_color"], "green");

        let center = doc["center"].as_array().unwrap();
        let lon = center[0].as_f64().unwrap();
        assert!((lon - (36.816944 + 36.08) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_map_has_no_center() {
        let dir = tempfile::tempdir().unwrap();
        let w = GeoJsonWriter::new(dir.path());
        let doc = w.to_value();
        assert!(doc.get("center").is_none());
        assert_eq!(doc["features"].as_array().unwrap().len(), 0);
        assert!(!w.path().exists());
    }
}
