//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` stores `(lon, lat)` in that order because that is the order
//! used by map documents and by GeoJSON positions.  Components are `f64`:
//! snapping works at a 5 m tolerance, well below what `f32` can resolve far
//! from the origin.

/// Mean Earth radius used by [`Coordinate::distance_m`], metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 `(longitude, latitude)` pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Degenerate default substituted for malformed input.
    pub const ZERO: Coordinate = Coordinate { lon: 0.0, lat: 0.0 };

    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Construct only if both components are finite.
    pub fn try_new(lon: f64, lat: f64) -> Option<Self> {
        (lon.is_finite() && lat.is_finite()).then_some(Self { lon, lat })
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric and zero for identical points.  Non-finite components
    /// propagate into the result.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// GeoJSON position `[lon, lat]`.
    #[inline]
    pub fn to_position(self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

/// Total haversine length of a polyline, metres.  Zero for fewer than two
/// points.
pub fn polyline_length_m(coords: &[Coordinate]) -> f64 {
    coords
        .windows(2)
        .map(|pair| pair[0].distance_m(pair[1]))
        .sum()
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lon, self.lat)
    }
}
