//! `vt-telemetry`: simulated readings and the rules applied to them.
//!
//! # Pipeline
//!
//! ```text
//! Registry ──► TelemetryGenerator::generate_batch(rng, now)
//!                 for each vehicle, in registry order:
//!                   base coordinate(route) + uniform jitter
//!                   speed ~ U[class range]
//!                   limit = registry.resolve_speed_limit(id)
//!                   overspeeding = speed > limit
//!          ──► filter_by_route(registry, batch, selection)
//!          ──► find_speeding(filtered)  /  SpeedingSummary
//! ```
//!
//! Every stage is a pure function of its inputs.  The generator takes the
//! RNG and the timestamp as arguments; memoizing a batch across repeated
//! queries is the caller's job ([`BatchCache`]).

pub mod cache;
pub mod error;
pub mod filter;
pub mod generator;
pub mod reading;
pub mod summary;


pub use cache::BatchCache;
pub use error::{TelemetryError, TelemetryResult};
pub use filter::{ALL_ROUTES, RouteSelection, filter_by_route, find_speeding, route_options};
pub use generator::{DEFAULT_JITTER_DEG, GeneratorConfig, MAX_JITTER_DEG, TelemetryGenerator, speed_range};
pub use reading::{Reading, is_overspeeding};
pub use summary::{MarkerColor, SpeedingSummary, map_center};
