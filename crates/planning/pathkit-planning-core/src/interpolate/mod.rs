//! Interpolation between two boundary samples.
//!
//! - `path`: arc-length interpolation of [`PathPoint`]s through a quintic
//!   heading spline and Gauss-Legendre integration of position
//! - `trajectory`: time interpolation of [`TrajectoryPoint`]s through a cubic
//!   speed spline and a cubic heading spline over the integrated arc length
//! - `sl`: weighted blend of frame-relative points
//!
//! Contract violations (query outside the bounds, non-increasing times) panic
//! in the plain entry points; the `try_` variants report them as
//! [`InterpolationError`] instead.

mod path;
mod sl;
mod trajectory;

use pathkit_math_core::SplineError;
use thiserror::Error;

use crate::config::InterpolationConfig;
use crate::types::{PathPoint, TrajectoryPoint};

pub use sl::interpolate_sl_point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("arc length {s} outside the bounding interval [{s0}, {s1}]")]
    OutOfRange { s: f64, s0: f64, s1: f64 },
    #[error("relative time {t} outside the sampled interval [{t0}, {t1}]")]
    TimeOutOfRange { t: f64, t0: f64, t1: f64 },
    #[error(
        "integrated arc span {integrated} differs from sampled span {sampled} by more than \
         {tolerance}"
    )]
    InconsistentArcSpan {
        integrated: f64,
        sampled: f64,
        tolerance: f64,
    },
    #[error("spline fit: {0}")]
    Spline(#[from] SplineError),
}

/// Stateless interpolator parameterized by its tolerances and consistency policy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interpolator {
    config: InterpolationConfig,
}

impl Interpolator {
    pub fn new(config: InterpolationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    /// Interpolate a path point at arc length `s`.
    ///
    /// # Panics
    /// If `s` lies outside `[p0.s, p1.s]`.
    pub fn path_point(&self, p0: &PathPoint, p1: &PathPoint, s: f64) -> PathPoint {
        self.try_path_point(p0, p1, s)
            .unwrap_or_else(|err| panic!("path point interpolation: {err}"))
    }

    /// Interpolate a trajectory point at relative time `t`.
    ///
    /// # Panics
    /// If the bounding times are not strictly increasing, or if the arc-span
    /// check is configured to reject and the spans disagree.
    pub fn trajectory_point(
        &self,
        tp0: &TrajectoryPoint,
        tp1: &TrajectoryPoint,
        t: f64,
    ) -> TrajectoryPoint {
        self.try_trajectory_point(tp0, tp1, t)
            .unwrap_or_else(|err| panic!("trajectory point interpolation: {err}"))
    }
}

/// Interpolate between `p0` and `p1` at arc length `s` with default tolerances.
///
/// # Panics
/// If `s` lies outside `[p0.s, p1.s]`.
pub fn interpolate_path_point(p0: &PathPoint, p1: &PathPoint, s: f64) -> PathPoint {
    Interpolator::default().path_point(p0, p1, s)
}

/// Non-panicking form of [`interpolate_path_point`].
pub fn try_interpolate_path_point(
    p0: &PathPoint,
    p1: &PathPoint,
    s: f64,
) -> Result<PathPoint, InterpolationError> {
    Interpolator::default().try_path_point(p0, p1, s)
}

/// Interpolate between `tp0` and `tp1` at relative time `t` with default tolerances.
///
/// # Panics
/// If `tp0.relative_time >= tp1.relative_time` while the path arc lengths differ.
pub fn interpolate_trajectory_point(
    tp0: &TrajectoryPoint,
    tp1: &TrajectoryPoint,
    t: f64,
) -> TrajectoryPoint {
    Interpolator::default().trajectory_point(tp0, tp1, t)
}

/// Non-panicking form of [`interpolate_trajectory_point`].
pub fn try_interpolate_trajectory_point(
    tp0: &TrajectoryPoint,
    tp1: &TrajectoryPoint,
    t: f64,
) -> Result<TrajectoryPoint, InterpolationError> {
    Interpolator::default().try_trajectory_point(tp0, tp1, t)
}
