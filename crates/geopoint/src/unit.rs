//! Output units for distance computations.

use std::str::FromStr;

use crate::GeoError;

/// International mile, in metres.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Unit a distance is reported in.
///
/// Two ways to get one from a label:
///
/// * [`FromStr`] is strict and rejects anything but `"m"` / `"mi"`.
/// * `From<&str>` is lenient: an unrecognised label becomes [`Meters`] and a
///   debug event is emitted. [`GeoPoint::distance_to`] takes this route.
///
/// [`Meters`]: DistanceUnit::Meters
/// [`GeoPoint::distance_to`]: crate::GeoPoint::distance_to
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meters,
    #[cfg_attr(feature = "serde", serde(rename = "mi"))]
    Miles,
}

impl DistanceUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Miles  => "mi",
        }
    }

    /// Convert a distance in metres into this unit.
    #[inline]
    pub fn convert(self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meters => meters,
            DistanceUnit::Miles  => meters / METERS_PER_MILE,
        }
    }

    fn parse_label(label: &str) -> Option<Self> {
        match label.trim() {
            "m"  => Some(DistanceUnit::Meters),
            "mi" => Some(DistanceUnit::Miles),
            _    => None,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| GeoError::UnknownUnit(s.to_owned()))
    }
}

impl From<&str> for DistanceUnit {
    fn from(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_else(|| {
            tracing::debug!(label, "unknown distance unit, falling back to metres");
            DistanceUnit::Meters
        })
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
