//! Geographic coordinate type with distance and bearing.
//!
//! # Model
//!
//! The Earth is treated as a perfect sphere of radius [`EARTH_RADIUS_M`]
//! unless a point carries its own radius override.  Distances combine the
//! haversine surface distance with the altitude difference:
//!
//!   d = sqrt(surface² + |alt₁ − alt₂|²)
//!
//! This ignores the true line-of-sight geometry and is only meant for short
//! to moderate separations.  Bearings are planar: raw degree deltas fed to
//! `atan2`, so they drift from the true initial course over long distances
//! and near the poles.

use std::fmt;

use crate::{DistanceOptions, DistanceUnit, GeoError};

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_009.0;

/// A latitude/longitude/altitude triple in double precision.
///
/// Coordinates are degrees and altitude is metres.  Nothing is range checked:
/// out-of-range or non-finite values flow through the arithmetic unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub altitude: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    spherical_radius: Option<f64>,
}

impl GeoPoint {
    #[inline]
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude, spherical_radius: None }
    }

    /// A point at altitude 0.
    #[inline]
    pub fn surface(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    /// Return a copy measuring distances against a sphere of `radius` metres.
    #[inline]
    pub fn with_spherical_radius(mut self, radius: f64) -> Self {
        self.spherical_radius = Some(radius);
        self
    }

    /// Radius of the sphere this point measures distances on.
    #[inline]
    pub fn spherical_radius(&self) -> f64 {
        self.spherical_radius.unwrap_or(EARTH_RADIUS_M)
    }

    /// Override the sphere radius for subsequent `distance_to` calls made
    /// from this point.  Points measured *to* are unaffected.
    pub fn set_spherical_radius(&mut self, radius: f64) {
        tracing::trace!(radius, point = %self, "spherical radius override set");
        self.spherical_radius = Some(radius);
    }

    /// Distance to `other` in the requested unit.
    ///
    /// `unit` accepts a [`DistanceUnit`] or a label; labels other than `"m"`
    /// and `"mi"` silently mean metres.
    pub fn distance_to(&self, other: &GeoPoint, unit: impl Into<DistanceUnit>) -> f64 {
        self.distance_with(other, DistanceOptions::from(unit.into()))
    }

    /// Distance to `other` in metres.
    #[inline]
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        self.distance_with(other, DistanceOptions::default())
    }

    /// Distance to `other` with call-time unit and radius.
    pub fn distance_with(&self, other: &GeoPoint, options: DistanceOptions) -> f64 {
        let radius = options.radius.unwrap_or_else(|| self.spherical_radius());
        let surface = radius * central_angle(self, other);
        let alt_delta = (self.altitude - other.altitude).abs();

        options.unit.convert(surface.hypot(alt_delta))
    }

    /// Compass heading towards `other` in degrees: 0 = N, 90 = E, 180 = S,
    /// 270 = W.
    ///
    /// Computed on the flat lat/lon plane, so only trustworthy over short
    /// distances.  Coincident points (altitude ignored) return `0`, the same
    /// value as due north; callers that care must compare the points
    /// themselves.
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        // `+ 0.0` turns -0.0 into +0.0 so due south stays at 180.
        let x = (other.longitude - self.longitude) + 0.0;
        let y = other.latitude - self.latitude;

        if x == 0.0 && y == 0.0 {
            return 0.0;
        }

        let offset = if x < 0.0 { 360.0 } else { 0.0 };
        let angle = x.atan2(y).to_degrees() + offset;

        // A vanishing westward offset can round up to exactly 360.
        if angle >= 360.0 { angle - 360.0 } else { angle }
    }
}

/// Haversine central angle between two points, radians.
fn central_angle(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (from.latitude - to.latitude).to_radians();
    let d_lon = (from.longitude - to.longitude).to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `a` just past 1 for antipodal points.
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::surface(latitude, longitude)
    }
}

impl From<(f64, f64, f64)> for GeoPoint {
    fn from((latitude, longitude, altitude): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, altitude)
    }
}

impl TryFrom<&[f64]> for GeoPoint {
    type Error = GeoError;

    /// `[lat, lon]` or `[lat, lon, alt]`.
    fn try_from(coords: &[f64]) -> Result<Self, Self::Error> {
        match *coords {
            [lat, lon] => Ok(Self::surface(lat, lon)),
            [lat, lon, alt] => Ok(Self::new(lat, lon, alt)),
            _ => Err(GeoError::Arity(coords.len())),
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.1} m)", self.latitude, self.longitude, self.altitude)
    }
}
