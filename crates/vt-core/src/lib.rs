//! `vt-core`: foundational types for the `rust_vt` vehicle tracking simulator.
//!
//! This crate is a dependency of every other `vt-*` crate.  It has no `vt-*`
//! dependencies and few external ones (`rand`, `chrono`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `VehicleId`                                           |
//! | [`geo`]     | `GeoPoint`, jitter, mean position                     |
//! | [`time`]    | `Timestamp` (second precision wall-clock time)        |
//! | [`rng`]     | `SimRng` (seedable batch RNG)                         |
//! | [`class`]   | `VehicleClass` enum                                   |
//! | [`error`]   | `VtError`, `VtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod class;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::VehicleClass;
pub use error::{VtError, VtResult};
pub use geo::GeoPoint;
pub use ids::VehicleId;
pub use rng::SimRng;
pub use time::Timestamp;
