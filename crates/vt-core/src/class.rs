//! Vehicle class enum shared by the registry and the telemetry generator.
//!
//! The set is closed: registry files naming any other class are rejected at
//! load time.  Not every class needs a class speed limit; classes missing
//! from the limit table fall through to the registry default.

use std::fmt;
use std::str::FromStr;

use crate::{VtError, VtResult};

/// The category a registered vehicle belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VehicleClass {
    /// Saloon cars, SUVs, and other private passenger vehicles.
    PrivateCar,
    Truck,
    Bus,
    Van,
    Motorcycle,
}

impl VehicleClass {
    /// Every variant, in declaration order.
    pub const ALL: [VehicleClass; 5] = [
        VehicleClass::PrivateCar,
        VehicleClass::Truck,
        VehicleClass::Bus,
        VehicleClass::Van,
        VehicleClass::Motorcycle,
    ];

    /// Snake-case label used in config files and output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::PrivateCar => "private_car",
            VehicleClass::Truck      => "truck",
            VehicleClass::Bus        => "bus",
            VehicleClass::Van        => "van",
            VehicleClass::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = VtError;

    fn from_str(s: &str) -> VtResult<Self> {
        let label = s.trim();
        VehicleClass::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .ok_or_else(|| VtError::Parse(format!("unknown vehicle class {label:?}")))
    }
}
