//! `vt-registry`: static vehicle metadata and speed-limit resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`record`]   | `VehicleRecord`                                           |
//! | [`registry`] | `Registry`, `RegistryBuilder`, limit resolution           |
//! | [`loader`]   | `Registry::from_toml_str`, `Registry::load_toml`          |
//! | [`kenya`]    | `Registry::kenya_demo` built-in data set                  |
//! | [`error`]    | `RegistryError`, `RegistryResult<T>`                      |
//!
//! # Limit resolution (summary)
//!
//! ```text
//! limit(v) = route_limits[v.assigned_route]
//!         ?? class_limits[v.vehicle_class]
//!         ?? default_limit_kmph              (80 unless configured)
//! ```
//!
//! A `Registry` is immutable once built.  Independent instances share
//! nothing, so tests build their own rather than touching globals.

pub mod error;
pub mod kenya;
pub mod loader;
pub mod record;
pub mod registry;


pub use error::{RegistryError, RegistryResult};
pub use record::VehicleRecord;
pub use registry::{DEFAULT_COORDINATE, DEFAULT_LIMIT_KMPH, Registry, RegistryBuilder};
