//! Route filter and overspeed detector.
//!
//! Both return new vectors and keep the relative order of their input.  An
//! empty result is a normal outcome, never an error.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use vt_registry::Registry;

use crate::{Reading, TelemetryResult};

/// Selection label meaning "do not filter".
pub const ALL_ROUTES: &str = "All Routes";

/// Which readings [`filter_by_route`] keeps.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RouteSelection {
    #[default]
    AllRoutes,
    Route(String),
}

impl RouteSelection {
    /// Interpret a selection string: [`ALL_ROUTES`] is the sentinel, any
    /// other text names a route.
    pub fn parse(label: &str) -> Self {
        if label == ALL_ROUTES {
            RouteSelection::AllRoutes
        } else {
            RouteSelection::Route(label.to_owned())
        }
    }

    /// Phrase used in summaries: the route name, or `"all routes"`.
    pub fn describe(&self) -> &str {
        match self {
            RouteSelection::AllRoutes => "all routes",
            RouteSelection::Route(r)  => r.as_str(),
        }
    }
}

impl FromStr for RouteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(RouteSelection::parse(s))
    }
}

impl fmt::Display for RouteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSelection::AllRoutes => f.write_str(ALL_ROUTES),
            RouteSelection::Route(r)  => f.write_str(r),
        }
    }
}

/// Selector choices: [`ALL_ROUTES`] followed by every assigned route, sorted.
pub fn route_options(registry: &Registry) -> Vec<String> {
    std::iter::once(ALL_ROUTES)
        .chain(registry.routes())
        .map(str::to_owned)
        .collect()
}

/// Keep the readings whose vehicle is assigned to the selected route.
///
/// The route is taken from the registry, not from the reading, so a reading
/// for a vehicle the registry does not know fails with
/// `RegistryError::UnknownVehicle`.  [`RouteSelection::AllRoutes`] returns
/// the input as-is without consulting the registry.
pub fn filter_by_route(
    registry:  &Registry,
    readings:  &[Reading],
    selection: &RouteSelection,
) -> TelemetryResult<Vec<Reading>> {
    let RouteSelection::Route(route) = selection else {
        return Ok(readings.to_vec());
    };

    let mut kept = Vec::new();
    for reading in readings {
        let vehicle = registry.get(reading.vehicle_id.as_str())?;
        if vehicle.assigned_route == *route {
            kept.push(reading.clone());
        }
    }
    Ok(kept)
}

/// The readings flagged as overspeeding.
pub fn find_speeding(readings: &[Reading]) -> Vec<Reading> {
    readings.iter().filter(|r| r.overspeeding).cloned().collect()
}
