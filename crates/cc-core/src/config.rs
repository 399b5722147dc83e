//! Engine tuning knobs.
//!
//! Indoor distances are in floorplan units (typically image pixels); outdoor
//! tolerances are in degrees of the raw lng/lat coordinates.
//!
//! Configs deserialised from user files are not trusted: the graph builders
//! call `validate` before using any value.

use crate::{CoreError, CoreResult};

/// `value` must be finite and `>= 0`.
fn non_negative(field: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig { field, value, expected: "finite and >= 0" })
    }
}

/// Indoor graph construction parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndoorConfig {
    /// A door farther than this from every node is left unconnected.
    pub max_connect_dist: f64,
    /// A door within this distance of its nearest node takes that node's
    /// coordinate.  Must not exceed `max_connect_dist` to have any effect.
    pub snap_threshold: f64,
    /// When set, corridor line endpoints closer than this are merged to their
    /// common average before the graph is built.
    pub endpoint_merge_tolerance: Option<f64>,
    /// When set, every pair of corridor vertices within this radius is linked
    /// by an extra edge.
    pub corridor_link_radius: Option<f64>,
}

impl Default for IndoorConfig {
    fn default() -> Self {
        Self {
            max_connect_dist: 1_000.0,
            snap_threshold: 5.0,
            endpoint_merge_tolerance: None,
            corridor_link_radius: None,
        }
    }
}

impl IndoorConfig {
    pub fn validate(&self) -> CoreResult<()> {
        non_negative("max_connect_dist", self.max_connect_dist)?;
        non_negative("snap_threshold", self.snap_threshold)?;
        if let Some(tol) = self.endpoint_merge_tolerance {
            non_negative("endpoint_merge_tolerance", tol)?;
        }
        if let Some(radius) = self.corridor_link_radius {
            non_negative("corridor_link_radius", radius)?;
        }
        Ok(())
    }
}

/// Outdoor footpath network parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutdoorConfig {
    /// Footpath vertices whose coordinates round to the same multiple of this
    /// value are merged into one network node.
    pub vertex_precision: f64,
    /// A route endpoint snaps to the nearest network node within this
    /// distance; farther endpoints are unreachable.
    pub endpoint_tolerance: f64,
    /// Per-axis tolerance for reporting a bus stop as passed by a route.
    pub passed_point_tolerance: f64,
}

impl Default for OutdoorConfig {
    fn default() -> Self {
        Self {
            vertex_precision: 1e-5,
            endpoint_tolerance: 1e-5,
            passed_point_tolerance: 3e-5,
        }
    }
}

impl OutdoorConfig {
    /// `vertex_precision` is a rounding step and must be strictly positive;
    /// the tolerances may be zero (exact matches only).
    pub fn validate(&self) -> CoreResult<()> {
        validate_precision(self.vertex_precision)?;
        non_negative("endpoint_tolerance", self.endpoint_tolerance)?;
        non_negative("passed_point_tolerance", self.passed_point_tolerance)
    }
}

/// Check a vertex-merging step on its own (for builders that take it
/// directly rather than through [`OutdoorConfig`]).
pub fn validate_precision(precision: f64) -> CoreResult<()> {
    if precision.is_finite() && precision > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig {
            field: "vertex_precision",
            value: precision,
            expected: "finite and > 0",
        })
    }
}

/// Combined configuration for the route planner.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    pub indoor: IndoorConfig,
    pub outdoor: OutdoorConfig,
}

impl RoutingConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.indoor.validate()?;
        self.outdoor.validate()
    }
}
