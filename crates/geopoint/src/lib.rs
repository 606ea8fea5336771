//! `geopoint` — a geographic point with great-circle distance and compass
//! bearing.
//!
//! Dependencies: `thiserror` for the error type, `tracing` for the odd
//! diagnostic event, and optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, `EARTH_RADIUS_M`, haversine and bearing    |
//! | [`unit`]    | `DistanceUnit`, `METERS_PER_MILE`                      |
//! | [`options`] | `DistanceOptions` (call-time unit and sphere radius)   |
//! | [`error`]   | `GeoError`, `GeoResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! # Example
//!
//! ```
//! use geopoint::GeoPoint;
//!
//! let origin = GeoPoint::surface(0.0, 0.0);
//! let east = GeoPoint::surface(0.0, 1.0);
//!
//! assert_eq!(origin.bearing_to(&east), 90.0);
//! assert!((origin.distance_to(&east, "m") - 111_195.0).abs() < 1.0);
//! ```

pub mod error;
pub mod geo;
pub mod options;
pub mod unit;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use options::DistanceOptions;
pub use unit::{DistanceUnit, METERS_PER_MILE};
