//! Routing and output configuration.
//!
//! Typically built in code or loaded from a JSON file by the application crate
//! (with the `serde` feature) and passed down explicitly.  Nothing in the
//! workspace reads configuration from ambient/global state.

use crate::{CoreError, CoreResult, Coordinate};

/// Default maximum distance between a raw coordinate and the node it snaps
/// to, metres.
pub const DEFAULT_SNAP_TOLERANCE_M: f64 = 5.0;

// ── RoutingConfig ─────────────────────────────────────────────────────────────

/// Parameters for graph construction and query snapping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Snapping tolerance in metres, used both when attaching edge endpoints
    /// to nodes and when snapping query coordinates.  Default: 5.0.
    pub snap_tolerance_m: f64,

    /// Output options for serialized routes.
    pub output: OutputConfig,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            snap_tolerance_m: DEFAULT_SNAP_TOLERANCE_M,
            output: OutputConfig::default(),
        }
    }
}

impl RoutingConfig {
    /// Reject tolerances that would make snapping meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.snap_tolerance_m.is_finite() || self.snap_tolerance_m < 0.0 {
            return Err(CoreError::Config(format!(
                "snap_tolerance_m must be a finite, non-negative number of metres (got {})",
                self.snap_tolerance_m
            )));
        }
        if let Some(p) = &self.output.projection {
            p.validate()?;
        }
        Ok(())
    }
}

// ── OutputConfig ──────────────────────────────────────────────────────────────

/// How positions are written into output features.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputConfig {
    /// When set, every output position is projected into image-pixel space
    /// instead of being written as `[lon, lat]`.
    pub projection: Option<PixelProjection>,
}

impl OutputConfig {
    /// Output position for `coord` under this configuration.
    pub fn position(&self, coord: Coordinate) -> Vec<f64> {
        match &self.projection {
            Some(p) => p.project(coord).to_vec(),
            None => coord.to_position(),
        }
    }
}

// ── PixelProjection ───────────────────────────────────────────────────────────

/// Affine degrees → pixel mapping for a georeferenced map image.
///
/// ```text
/// x = (lon - origin_lon) * px_per_deg_lon + offset_x
/// y = (lat - origin_lat) * px_per_deg_lat + offset_y
/// ```
///
/// The default calibration matches the campus overlay image the front end
/// ships with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelProjection {
    pub origin_lon:     f64,
    pub origin_lat:     f64,
    pub px_per_deg_lon: f64,
    pub px_per_deg_lat: f64,
    pub offset_x:       f64,
    pub offset_y:       f64,
}

impl Default for PixelProjection {
    fn default() -> Self {
        Self {
            origin_lon:     -112.450971,
            origin_lat:     34.614714,
            px_per_deg_lon: 85.53 / 0.002074,
            px_per_deg_lat: 61.38 / 0.001231,
            offset_x:       293.38,
            offset_y:       213.5,
        }
    }
}

impl PixelProjection {
    /// `[x, y]` pixel position of `coord`.
    #[inline]
    pub fn project(&self, coord: Coordinate) -> [f64; 2] {
        [
            (coord.lon - self.origin_lon) * self.px_per_deg_lon + self.offset_x,
            (coord.lat - self.origin_lat) * self.px_per_deg_lat + self.offset_y,
        ]
    }

    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            self.origin_lon,
            self.origin_lat,
            self.px_per_deg_lon,
            self.px_per_deg_lat,
            self.offset_x,
            self.offset_y,
        ];
        if fields.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(CoreError::Config("pixel projection parameters must be finite".into()))
        }
    }
}
