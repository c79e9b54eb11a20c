//! Built-in demo registry: five vehicles on two Kenyan routes.

use vt_core::{GeoPoint, VehicleClass};

use crate::{Registry, RegistryResult};

pub const MAU_MAU_NAROK: &str = "Mau Mau - Narok";
pub const NAKURU_ROAD: &str = "Nakuru Road";

impl Registry {
    /// The registry the dashboard runs with when no file is given.
    ///
    /// | Vehicle   | Class         | Route             |
    /// |-----------|---------------|-------------------|
    /// | `KDA123A` | private_car   | Mau Mau - Narok   |
    /// | `KBX456B` | truck         | Nakuru Road       |
    /// | `KCZ789C` | private_car   | Mau Mau - Narok   |
    /// | `KTX987D` | bus           | Nakuru Road       |
    /// | `KLM654E` | private_car   | Mau Mau - Narok   |
    pub fn kenya_demo() -> RegistryResult<Registry> {
        Registry::builder()
            .vehicle("KDA123A", VehicleClass::PrivateCar, MAU_MAU_NAROK)
            .vehicle("KBX456B", VehicleClass::Truck,      NAKURU_ROAD)
            .vehicle("KCZ789C", VehicleClass::PrivateCar, MAU_MAU_NAROK)
            .vehicle("KTX987D", VehicleClass::Bus,        NAKURU_ROAD)
            .vehicle("KLM654E", VehicleClass::PrivateCar, MAU_MAU_NAROK)
            .class_limit(VehicleClass::PrivateCar, 80)
            .class_limit(VehicleClass::Truck,      60)
            .class_limit(VehicleClass::Bus,        70)
            .route_limit(MAU_MAU_NAROK, 70)
            .route_limit(NAKURU_ROAD,   60)
            // Nairobi and Nakuru town centres.
            .route_coordinate(MAU_MAU_NAROK, GeoPoint::new(-1.286389, 36.816944))
            .route_coordinate(NAKURU_ROAD,   GeoPoint::new(-0.3031, 36.0800))
            .build()
    }
}
