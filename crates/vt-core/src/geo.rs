//! Geographic coordinate type.
//!
//! Positions are stored flat: no projection, no great-circle maths.  Jitter
//! and averaging operate on raw degrees, which is adequate for the few
//! hundredths of a degree the simulator ever moves a vehicle.

use crate::SimRng;

/// A WGS-84 coordinate in decimal degrees.
///
/// `f64` keeps the six decimal places route base coordinates are written
/// with (`-1.286389, 36.816944`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Offset each axis independently by a uniform draw from
    /// `[-half_deg, +half_deg]`.
    ///
    /// Latitude is drawn before longitude so a seeded RNG yields the same
    /// point every run.
    pub fn jittered(self, rng: &mut SimRng, half_deg: f64) -> GeoPoint {
        let d_lat = rng.gen_range(-half_deg..=half_deg);
        let d_lon = rng.gen_range(-half_deg..=half_deg);
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// Axis-aligned box check in degrees.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }

    /// Arithmetic mean of `points`, or `None` if the iterator is empty.
    pub fn mean<I>(points: I) -> Option<GeoPoint>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let (sum_lat, sum_lon, n) = points
            .into_iter()
            .fold((0.0, 0.0, 0usize), |(la, lo, n), p| (la + p.lat, lo + p.lon, n + 1));
        (n > 0).then(|| GeoPoint::new(sum_lat / n as f64, sum_lon / n as f64))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
