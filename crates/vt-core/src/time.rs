//! Wall-clock timestamps with one-second resolution.
//!
//! Readings carry the local time they were generated at, truncated to whole
//! seconds and rendered as `YYYY-MM-DD HH:MM:SS`.  The generator never reads
//! the clock itself: callers take `Timestamp::now()` once per batch and pass
//! it in, so every reading in a batch shares one stamp and tests can use a
//! fixed value.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};

use crate::{VtError, VtResult};

/// Display / parse format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A naive local date-time with sub-second precision removed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time.
    pub fn now() -> Self {
        Timestamp::from_naive(Local::now().naive_local())
    }

    /// Wrap `dt`, dropping any fractional seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Timestamp(dt.trunc_subsecs(0))
    }

    /// Build from Unix seconds, interpreted as UTC.  Returns `None` when out
    /// of chrono's representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|dt| Timestamp(dt.naive_utc()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = VtError;

    fn from_str(s: &str) -> VtResult<Self> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Timestamp)
            .map_err(|e| VtError::Parse(format!("invalid timestamp {s:?}: {e}")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
