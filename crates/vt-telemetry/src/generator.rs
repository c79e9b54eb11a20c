//! Batch generator: one simulated [`Reading`] per registered vehicle.

use std::ops::RangeInclusive;

use vt_core::{SimRng, Timestamp, VehicleClass};
use vt_registry::{Registry, VehicleRecord};

use crate::{Reading, TelemetryError, TelemetryResult};

/// Half-width, in degrees, of the square a vehicle is scattered across
/// around its route's base coordinate.
pub const DEFAULT_JITTER_DEG: f64 = 0.03;

/// Largest accepted jitter half-width: a full latitude hemisphere.
pub const MAX_JITTER_DEG: f64 = 90.0;

/// Closed range a vehicle's simulated speed is drawn from.
///
/// Private cars run fastest and trucks slowest; unlisted classes get a wide
/// spread.
pub fn speed_range(class: VehicleClass) -> RangeInclusive<u32> {
    match class {
        VehicleClass::PrivateCar => 40..=100,
        VehicleClass::Truck      => 30..=70,
        VehicleClass::Bus        => 30..=75,
        _                        => 20..=90,
    }
}

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Tunables for [`TelemetryGenerator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Position jitter half-width in degrees, in `0.0..=MAX_JITTER_DEG`.
    pub jitter_deg: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { jitter_deg: DEFAULT_JITTER_DEG }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> TelemetryResult<()> {
        if !(0.0..=MAX_JITTER_DEG).contains(&self.jitter_deg) {
            return Err(TelemetryError::Config(format!(
                "jitter_deg must be between 0 and {MAX_JITTER_DEG} degrees (got {})",
                self.jitter_deg
            )));
        }
        Ok(())
    }
}

// ── TelemetryGenerator ────────────────────────────────────────────────────────

/// Produces reading batches for every vehicle in a borrowed [`Registry`].
///
/// Holds no mutable state: the RNG and the generation time are passed to
/// each [`generate_batch`](Self::generate_batch) call, so two calls with
/// equally seeded RNGs and the same timestamp return identical batches.
pub struct TelemetryGenerator<'r> {
    registry: &'r Registry,
    config:   GeneratorConfig,
}

impl<'r> TelemetryGenerator<'r> {
    /// Generator with [`GeneratorConfig::default`].
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry, config: GeneratorConfig::default() }
    }

    pub fn with_config(registry: &'r Registry, config: GeneratorConfig) -> TelemetryResult<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// One reading per registered vehicle, in registry order, all stamped
    /// with `now`.
    pub fn generate_batch(&self, rng: &mut SimRng, now: Timestamp) -> TelemetryResult<Vec<Reading>> {
        let batch = self
            .registry
            .vehicles()
            .map(|vehicle| self.simulate(vehicle, rng, now))
            .collect::<TelemetryResult<Vec<_>>>()?;

        log::debug!(
            "generated {} readings at {now}, {} overspeeding",
            batch.len(),
            batch.iter().filter(|r| r.overspeeding).count(),
        );
        Ok(batch)
    }

    fn simulate(
        &self,
        vehicle: &VehicleRecord,
        rng:     &mut SimRng,
        now:     Timestamp,
    ) -> TelemetryResult<Reading> {
        // Draw order (lat, lon, speed) is part of the seeded-output contract.
        let position = self
            .registry
            .base_coordinate(&vehicle.assigned_route)
            .jittered(rng, self.config.jitter_deg);
        let speed_kmph = rng.gen_range(speed_range(vehicle.vehicle_class));
        let speed_limit = self.registry.resolve_speed_limit(vehicle.vehicle_id.as_str())?;

        Ok(Reading::classify(vehicle, position, speed_kmph, now, speed_limit))
    }
}
