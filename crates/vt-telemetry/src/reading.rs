//! One simulated telemetry sample.

use vt_core::{GeoPoint, Timestamp, VehicleClass, VehicleId};
use vt_registry::VehicleRecord;

/// `true` when `speed_kmph` strictly exceeds `limit_kmph`.  Driving exactly
/// at the limit is not overspeeding.
#[inline]
pub fn is_overspeeding(speed_kmph: u32, limit_kmph: u32) -> bool {
    speed_kmph > limit_kmph
}

/// A vehicle's simulated position and speed at one instant, annotated with
/// the limit that applies to it.
///
/// `vehicle_class` and `route` are copied from the registry so consumers
/// can display them without a second lookup.  `overspeeding` is always
/// populated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    pub vehicle_id:    VehicleId,
    pub vehicle_class: VehicleClass,
    pub route:         String,
    pub latitude:      f64,
    pub longitude:     f64,
    pub speed_kmph:    u32,
    pub timestamp:     Timestamp,
    pub speed_limit:   u32,
    pub overspeeding:  bool,
}

impl Reading {
    /// Assemble a reading for `vehicle` and derive its overspeeding flag.
    pub fn classify(
        vehicle:     &VehicleRecord,
        position:    GeoPoint,
        speed_kmph:  u32,
        timestamp:   Timestamp,
        speed_limit: u32,
    ) -> Self {
        Reading {
            vehicle_id:    vehicle.vehicle_id.clone(),
            vehicle_class: vehicle.vehicle_class,
            route:         vehicle.assigned_route.clone(),
            latitude:      position.lat,
            longitude:     position.lon,
            speed_kmph,
            timestamp,
            speed_limit,
            overspeeding:  is_overspeeding(speed_kmph, speed_limit),
        }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// km/h above the limit; zero when within it.
    #[inline]
    pub fn excess_kmph(&self) -> u32 {
        self.speed_kmph.saturating_sub(self.speed_limit)
    }

    /// Map-marker hover text.
    pub fn tooltip(&self) -> String {
        format!(
            "ID: {} | Type: {} | Speed: {} km/h | Limit: {} km/h",
            self.vehicle_id, self.vehicle_class, self.speed_kmph, self.speed_limit,
        )
    }
}
