//! Per-call configuration for distance computations.

use crate::DistanceUnit;

/// Options accepted by [`GeoPoint::distance_with`](crate::GeoPoint::distance_with).
///
/// `radius`, when set, replaces the origin point's
/// [`spherical_radius`](crate::GeoPoint::spherical_radius) for that one call,
/// so a shared `GeoPoint` never has to be mutated to measure against a
/// different sphere.
///
/// ```
/// use geopoint::{DistanceOptions, DistanceUnit, GeoPoint};
///
/// let opts = DistanceOptions::default()
///     .unit(DistanceUnit::Miles)
///     .radius(3_389_500.0); // Mars
/// let d = GeoPoint::surface(0.0, 0.0).distance_with(&GeoPoint::surface(0.0, 1.0), opts);
/// assert!(d > 36.0 && d < 37.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceOptions {
    pub unit: DistanceUnit,
    /// Sphere radius in metres.
    pub radius: Option<f64>,
}

impl DistanceOptions {
    pub fn unit(mut self, unit: impl Into<DistanceUnit>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl From<DistanceUnit> for DistanceOptions {
    fn from(unit: DistanceUnit) -> Self {
        Self { unit, radius: None }
    }
}
