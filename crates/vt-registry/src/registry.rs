//! The registry and its fluent builder.

use std::collections::{BTreeSet, HashMap};

use vt_core::{GeoPoint, VehicleClass, VehicleId};

use crate::{RegistryError, RegistryResult, VehicleRecord};

/// Limit applied when neither the route nor the class has an entry.
pub const DEFAULT_LIMIT_KMPH: u32 = 80;

/// Base coordinate for routes with no coordinate entry (central Nairobi).
pub const DEFAULT_COORDINATE: GeoPoint = GeoPoint { lat: -1.2921, lon: 36.8219 };

// ── Registry ──────────────────────────────────────────────────────────────────

/// Immutable vehicle metadata plus the speed-limit and route-coordinate
/// tables.
///
/// Do not construct directly; use [`RegistryBuilder`], [`Registry::kenya_demo`]
/// or the TOML loader.
#[derive(Clone, Debug)]
pub struct Registry {
    /// Insertion order is iteration order.
    vehicles:           Vec<VehicleRecord>,
    /// `vehicle_id` → position in `vehicles`.
    index:              HashMap<VehicleId, usize>,
    route_limits:       HashMap<String, u32>,
    class_limits:       HashMap<VehicleClass, u32>,
    route_coordinates:  HashMap<String, GeoPoint>,
    default_limit_kmph: u32,
    default_coordinate: GeoPoint,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// All vehicles in registration order.
    pub fn vehicles(&self) -> impl ExactSizeIterator<Item = &VehicleRecord> + '_ {
        self.vehicles.iter()
    }

    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.index.contains_key(vehicle_id)
    }

    /// Look up a vehicle, failing with [`RegistryError::UnknownVehicle`].
    pub fn get(&self, vehicle_id: &str) -> RegistryResult<&VehicleRecord> {
        self.index
            .get(vehicle_id)
            .map(|&i| &self.vehicles[i])
            .ok_or_else(|| RegistryError::UnknownVehicle(vehicle_id.to_owned()))
    }

    /// Speed limit (km/h) that applies to `vehicle_id`.
    ///
    /// Route limit first, then class limit, then the registry default.
    pub fn resolve_speed_limit(&self, vehicle_id: &str) -> RegistryResult<u32> {
        self.get(vehicle_id).map(|v| self.limit_for(v))
    }

    /// Same policy as [`resolve_speed_limit`](Self::resolve_speed_limit) for
    /// a record already in hand.
    pub fn limit_for(&self, vehicle: &VehicleRecord) -> u32 {
        self.route_limits
            .get(&vehicle.assigned_route)
            .or_else(|| self.class_limits.get(&vehicle.vehicle_class))
            .copied()
            .unwrap_or(self.default_limit_kmph)
    }

    /// Base coordinate for `route`, or the registry default coordinate.
    pub fn base_coordinate(&self, route: &str) -> GeoPoint {
        self.route_coordinates
            .get(route)
            .copied()
            .unwrap_or(self.default_coordinate)
    }

    pub fn route_limit(&self, route: &str) -> Option<u32> {
        self.route_limits.get(route).copied()
    }

    pub fn class_limit(&self, class: VehicleClass) -> Option<u32> {
        self.class_limits.get(&class).copied()
    }

    pub fn default_limit_kmph(&self) -> u32 {
        self.default_limit_kmph
    }

    /// Distinct assigned routes, sorted.
    pub fn routes(&self) -> Vec<&str> {
        self.vehicles
            .iter()
            .map(|v| v.assigned_route.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// ── RegistryBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Registry`].
///
/// Ids are validated in [`build`](Self::build), not when added, so a chain of
/// `.vehicle(..)` calls stays infallible.
///
/// # Example
///
/// ```rust
/// use vt_core::VehicleClass;
/// use vt_registry::Registry;
///
/// let registry = Registry::builder()
///     .vehicle("KBX456B", VehicleClass::Truck, "Nakuru Road")
///     .route_limit("Nakuru Road", 60)
///     .class_limit(VehicleClass::Truck, 60)
///     .build()
///     .unwrap();
/// assert_eq!(registry.resolve_speed_limit("KBX456B").unwrap(), 60);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    vehicles:           Vec<(String, VehicleClass, String)>,
    route_limits:       HashMap<String, u32>,
    class_limits:       HashMap<VehicleClass, u32>,
    route_coordinates:  HashMap<String, GeoPoint>,
    default_limit_kmph: Option<u32>,
    default_coordinate: Option<GeoPoint>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle.  Registration order is batch order.
    pub fn vehicle(
        mut self,
        vehicle_id: impl Into<String>,
        class:      VehicleClass,
        route:      impl Into<String>,
    ) -> Self {
        self.vehicles.push((vehicle_id.into(), class, route.into()));
        self
    }

    /// Set the limit for `route`.  A later call for the same route wins.
    pub fn route_limit(mut self, route: impl Into<String>, kmph: u32) -> Self {
        self.route_limits.insert(route.into(), kmph);
        self
    }

    /// Set the fallback limit for `class`.  A later call for the same class wins.
    pub fn class_limit(mut self, class: VehicleClass, kmph: u32) -> Self {
        self.class_limits.insert(class, kmph);
        self
    }

    pub fn route_coordinate(mut self, route: impl Into<String>, point: GeoPoint) -> Self {
        self.route_coordinates.insert(route.into(), point);
        self
    }

    /// Override [`DEFAULT_LIMIT_KMPH`].
    pub fn default_limit(mut self, kmph: u32) -> Self {
        self.default_limit_kmph = Some(kmph);
        self
    }

    /// Override [`DEFAULT_COORDINATE`].
    pub fn default_coordinate(mut self, point: GeoPoint) -> Self {
        self.default_coordinate = Some(point);
        self
    }

    /// Validate and freeze.
    ///
    /// Fails on an empty or duplicated vehicle id, a zero speed limit, or a
    /// non-finite coordinate.
    pub fn build(self) -> RegistryResult<Registry> {
        let default_limit_kmph = self.default_limit_kmph.unwrap_or(DEFAULT_LIMIT_KMPH);
        let default_coordinate = self.default_coordinate.unwrap_or(DEFAULT_COORDINATE);

        // ── Validate tables ───────────────────────────────────────────────
        if default_limit_kmph == 0 {
            return Err(RegistryError::Config("default speed limit must be positive".into()));
        }
        if let Some(route) = self.route_limits.iter().find(|&(_, &l)| l == 0).map(|(r, _)| r) {
            return Err(RegistryError::Config(format!("speed limit for route {route:?} must be positive")));
        }
        if let Some(class) = self.class_limits.iter().find(|&(_, &l)| l == 0).map(|(c, _)| c) {
            return Err(RegistryError::Config(format!("speed limit for class {class} must be positive")));
        }
        let bad_point = |p: &GeoPoint| !(p.lat.is_finite() && p.lon.is_finite());
        if bad_point(&default_coordinate) {
            return Err(RegistryError::Config("default coordinate must be finite".into()));
        }
        if let Some((route, _)) = self.route_coordinates.iter().find(|(_, p)| bad_point(*p)) {
            return Err(RegistryError::Config(format!("coordinate for route {route:?} must be finite")));
        }

        // ── Validate and index vehicles ───────────────────────────────────
        let mut vehicles = Vec::with_capacity(self.vehicles.len());
        let mut index = HashMap::with_capacity(self.vehicles.len());

        for (raw_id, vehicle_class, assigned_route) in self.vehicles {
            let vehicle_id = VehicleId::new(&raw_id)?;
            if index.contains_key(&vehicle_id) {
                return Err(RegistryError::DuplicateVehicle(vehicle_id));
            }
            if !self.route_coordinates.contains_key(&assigned_route) {
                log::warn!(
                    "vehicle {vehicle_id}: route {assigned_route:?} has no base coordinate, using {default_coordinate}"
                );
            }
            index.insert(vehicle_id.clone(), vehicles.len());
            vehicles.push(VehicleRecord { vehicle_id, vehicle_class, assigned_route });
        }

        log::debug!(
            "registry built: {} vehicles, {} route limits, {} class limits",
            vehicles.len(),
            self.route_limits.len(),
            self.class_limits.len(),
        );

        Ok(Registry {
            vehicles,
            index,
            route_limits: self.route_limits,
            class_limits: self.class_limits,
            route_coordinates: self.route_coordinates,
            default_limit_kmph,
            default_coordinate,
        })
    }
}
