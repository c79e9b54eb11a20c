//! Static per-vehicle metadata.

use vt_core::{VehicleClass, VehicleId};

/// One registered vehicle.  Fields never change after the registry is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRecord {
    pub vehicle_id:     VehicleId,
    pub vehicle_class:  VehicleClass,
    /// Route the vehicle normally travels.  Routes absent from the limit or
    /// coordinate tables fall back to class limits and the default
    /// coordinate respectively.
    pub assigned_route: String,
}
