//! Dashboard-facing summaries of a (usually filtered) batch.

use std::fmt;

use vt_core::GeoPoint;

use crate::{Reading, RouteSelection, find_speeding};

/// Where to centre the map: the mean position of `readings`, or `None`
/// when there is nothing to show.
pub fn map_center(readings: &[Reading]) -> Option<GeoPoint> {
    GeoPoint::mean(readings.iter().map(Reading::position))
}

/// Marker colour for a vehicle on the map.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MarkerColor {
    Green,
    Red,
}

impl MarkerColor {
    pub fn for_reading(reading: &Reading) -> Self {
        if reading.overspeeding { MarkerColor::Red } else { MarkerColor::Green }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Red   => "red",
        }
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SpeedingSummary ───────────────────────────────────────────────────────────

/// Outcome of checking a batch for speeders.
///
/// Separates "there was nothing to check" from "checked, nobody speeding".
#[derive(Clone, Debug, PartialEq)]
pub enum SpeedingSummary {
    NoVehicles,
    NoneSpeeding,
    Speeding(Vec<Reading>),
}

impl SpeedingSummary {
    pub fn from_readings(readings: &[Reading]) -> Self {
        if readings.is_empty() {
            return SpeedingSummary::NoVehicles;
        }
        let speeding = find_speeding(readings);
        if speeding.is_empty() {
            SpeedingSummary::NoneSpeeding
        } else {
            SpeedingSummary::Speeding(speeding)
        }
    }

    pub fn speeding(&self) -> &[Reading] {
        match self {
            SpeedingSummary::Speeding(v) => v.as_slice(),
            _ => &[],
        }
    }

    /// One-line verdict for the given route selection.
    pub fn headline(&self, selection: &RouteSelection) -> String {
        match self {
            SpeedingSummary::NoVehicles   => "No vehicles to check for speeding.".to_owned(),
            SpeedingSummary::NoneSpeeding => "No speeding vehicles detected on this route.".to_owned(),
            SpeedingSummary::Speeding(v)  => format!(
                "{} vehicle(s) detected speeding on {}!",
                v.len(),
                selection.describe(),
            ),
        }
    }

    /// One line per speeding vehicle; empty unless [`Speeding`](Self::Speeding).
    pub fn lines(&self) -> Vec<String> {
        self.speeding()
            .iter()
            .map(|r| {
                format!(
                    "- Vehicle {} ({}) at {} km/h, limit {} km/h",
                    r.vehicle_id, r.vehicle_class, r.speed_kmph, r.speed_limit,
                )
            })
            .collect()
    }
}
