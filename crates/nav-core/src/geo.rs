//! Coordinate type and planar distance.
//!
//! `GeoPoint` stores latitude/longitude as `f64`.  Polyline output is
//! fixed-precision (five or six decimal places), and single precision loses
//! the sixth decimal above ~100° of longitude.

/// A latitude/longitude pair.
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

    /// Euclidean distance treating `(lat, lon)` as Cartesian coordinates.
    ///
    /// Units are degrees, not metres.  This is the search heuristic's
    /// distance: cheap, and consistent with graphs whose edge weights were
    /// derived the same way.
    #[inline]
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }

    /// `true` if both components agree within `eps`.
    #[inline]
    pub fn approx_eq(self, other: GeoPoint, eps: f64) -> bool {
        (self.lat - other.lat).abs() <= eps && (self.lon - other.lon).abs() <= eps
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
