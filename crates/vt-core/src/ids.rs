//! Vehicle identifier.
//!
//! Vehicles are keyed by their registration plate (`"KDA123A"`), so unlike
//! an index-based id the wrapper holds an owned `String`.  It is `Ord + Hash`
//! for use as a map key and implements `Borrow<str>` so maps keyed by
//! `VehicleId` can be queried with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

use crate::{VtError, VtResult};

/// Unique identifier of a registered vehicle (its plate number).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VehicleId(String);

impl VehicleId {
    /// Build an id from `raw`, trimming surrounding whitespace.
    ///
    /// Fails with [`VtError::Parse`] if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> VtResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VtError::Parse("vehicle id must not be empty".into()));
        }
        Ok(VehicleId(trimmed.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VehicleId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VehicleId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for VehicleId {
    type Err = VtError;

    fn from_str(s: &str) -> VtResult<Self> {
        VehicleId::new(s)
    }
}
