//! Point records shared by the interpolators.
//!
//! All fields default to zero when deserialized, so fixtures only need to
//! spell out what they use.

use serde::{Deserialize, Serialize};

/// A sample on a planned path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    /// Heading in radians, normalized to (-π, π].
    pub theta: f64,
    /// Curvature.
    pub kappa: f64,
    /// First derivative of curvature with respect to arc length.
    pub dkappa: f64,
    /// Second derivative of curvature with respect to arc length.
    pub ddkappa: f64,
    /// Arc length from the start of the path.
    pub s: f64,
}

impl PathPoint {
    /// Point at `(x, y)` with heading `theta` and arc length `s`; curvature terms are zero.
    pub fn new(x: f64, y: f64, theta: f64, s: f64) -> Self {
        Self {
            x,
            y,
            theta,
            s,
            ..Default::default()
        }
    }

    pub fn with_curvature(mut self, kappa: f64, dkappa: f64, ddkappa: f64) -> Self {
        self.kappa = kappa;
        self.dkappa = dkappa;
        self.ddkappa = ddkappa;
        self
    }
}

/// A path sample with speed, acceleration and a time stamp relative to the
/// trajectory start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryPoint {
    pub path_point: PathPoint,
    pub v: f64,
    pub a: f64,
    pub relative_time: f64,
}

impl TrajectoryPoint {
    pub fn new(path_point: PathPoint, v: f64, a: f64, relative_time: f64) -> Self {
        Self {
            path_point,
            v,
            a,
            relative_time,
        }
    }
}

/// Frame-relative point: arc length along a reference line and lateral offset from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SLPoint {
    pub s: f64,
    pub l: f64,
}

impl SLPoint {
    pub fn new(s: f64, l: f64) -> Self {
        Self { s, l }
    }
}
