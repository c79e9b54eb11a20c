//! TOML registry loader.
//!
//! # File format
//!
//! ```toml
//! default_limit_kmph = 80                         # optional
//! default_coordinate = { lat = -1.2921, lon = 36.8219 }  # optional
//!
//! [[vehicles]]
//! id    = "KDA123A"
//! class = "private_car"
//! route = "Mau Mau - Narok"
//!
//! [route_limits]
//! "Mau Mau - Narok" = 70
//!
//! [class_limits]
//! private_car = 80
//!
//! [route_coordinates]
//! "Mau Mau - Narok" = { lat = -1.286389, lon = 36.816944 }
//! ```
//!
//! `[[vehicles]]` is an array so registration order survives the round trip.
//! Class labels are the snake-case names of [`VehicleClass`]; anything else
//! is rejected.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use vt_core::{GeoPoint, VehicleClass};

use crate::{Registry, RegistryBuilder, RegistryError, RegistryResult};

// ── File records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    default_limit_kmph: Option<u32>,
    default_coordinate: Option<CoordinateRecord>,
    #[serde(default)]
    vehicles:           Vec<VehicleRow>,
    #[serde(default)]
    route_limits:       BTreeMap<String, u32>,
    #[serde(default)]
    class_limits:       BTreeMap<String, u32>,
    #[serde(default)]
    route_coordinates:  BTreeMap<String, CoordinateRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VehicleRow {
    id:    String,
    class: String,
    route: String,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
struct CoordinateRecord {
    lat: f64,
    lon: f64,
}

impl From<CoordinateRecord> for GeoPoint {
    fn from(c: CoordinateRecord) -> GeoPoint {
        GeoPoint::new(c.lat, c.lon)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

impl Registry {
    /// Load a registry from a TOML file on disk.
    pub fn load_toml(path: &Path) -> RegistryResult<Registry> {
        let content = std::fs::read_to_string(path)?;
        let registry = Registry::from_toml_str(&content)?;
        log::info!("loaded {} vehicles from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Parse a registry from TOML text.
    pub fn from_toml_str(content: &str) -> RegistryResult<Registry> {
        let file: RegistryFile = toml::from_str(content)
            .map_err(|e| RegistryError::Parse(e.to_string()))?;
        file.into_builder()?.build()
    }
}

impl RegistryFile {
    fn into_builder(self) -> RegistryResult<RegistryBuilder> {
        let mut builder = RegistryBuilder::new();

        if let Some(kmph) = self.default_limit_kmph {
            builder = builder.default_limit(kmph);
        }
        if let Some(c) = self.default_coordinate {
            builder = builder.default_coordinate(c.into());
        }

        for row in self.vehicles {
            let class: VehicleClass = row.class.parse()?;
            builder = builder.vehicle(row.id, class, row.route);
        }
        for (route, kmph) in self.route_limits {
            builder = builder.route_limit(route, kmph);
        }
        for (label, kmph) in self.class_limits {
            builder = builder.class_limit(label.parse()?, kmph);
        }
        for (route, c) in self.route_coordinates {
            builder = builder.route_coordinate(route, c.into());
        }

        Ok(builder)
    }
}
