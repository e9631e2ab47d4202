//! Ordered point sequences sampled through the pairwise interpolators.
//!
//! Lookup model:
//! - A query at or before the first sample returns the first point; at or
//!   past the last sample it returns the last point.
//! - Otherwise the bracketing pair `[i, i+1]` is found by binary search and
//!   handed to the [`Interpolator`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpolate::{InterpolationError, Interpolator};
use crate::types::{PathPoint, TrajectoryPoint};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("{0} needs at least one point")]
    Empty(&'static str),
    #[error("arc length decreases at index {index}: {prev} -> {next}")]
    DecreasingArcLength { index: usize, prev: f64, next: f64 },
    #[error("relative time must increase at index {index}: {prev} -> {next}")]
    NonIncreasingTime { index: usize, prev: f64, next: f64 },
    #[error("{field} at index {index} is not finite: {value}")]
    NonFinite {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

fn check_finite(index: usize, field: &'static str, value: f64) -> Result<(), PathError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PathError::NonFinite {
            index,
            field,
            value,
        })
    }
}

/// Path samples with non-decreasing arc length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathPoint>", into = "Vec<PathPoint>")]
pub struct DiscretizedPath {
    points: Vec<PathPoint>,
}

impl DiscretizedPath {
    pub fn new(points: Vec<PathPoint>) -> Result<Self, PathError> {
        if points.is_empty() {
            return Err(PathError::Empty("path"));
        }
        for (i, p) in points.iter().enumerate() {
            check_finite(i, "s", p.s)?;
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].s < pair[0].s {
                return Err(PathError::DecreasingArcLength {
                    index: i + 1,
                    prev: pair[0].s,
                    next: pair[1].s,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Arc length covered from the first to the last sample.
    pub fn length(&self) -> f64 {
        self.last().s - self.first().s
    }

    fn first(&self) -> &PathPoint {
        &self.points[0]
    }

    fn last(&self) -> &PathPoint {
        &self.points[self.points.len() - 1]
    }

    /// Sample at arc length `s` with default tolerances.
    pub fn evaluate(&self, s: f64) -> PathPoint {
        self.evaluate_with(&Interpolator::default(), s)
    }

    /// # Panics
    /// If `s` is NaN.
    pub fn evaluate_with(&self, interpolator: &Interpolator, s: f64) -> PathPoint {
        let first = self.first();
        let last = self.last();
        if s.is_nan() {
            // Rejected by the interpolator's range check.
            return interpolator.path_point(first, last, s);
        }
        if s <= first.s {
            return *first;
        }
        if s >= last.s {
            return *last;
        }
        // First sample strictly past s; always in 1..len here.
        let upper = self.points.partition_point(|p| p.s <= s);
        interpolator.path_point(&self.points[upper - 1], &self.points[upper], s)
    }
}

impl TryFrom<Vec<PathPoint>> for DiscretizedPath {
    type Error = PathError;

    fn try_from(points: Vec<PathPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<DiscretizedPath> for Vec<PathPoint> {
    fn from(path: DiscretizedPath) -> Self {
        path.points
    }
}

/// Trajectory samples with strictly increasing relative time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TrajectoryPoint>", into = "Vec<TrajectoryPoint>")]
pub struct DiscretizedTrajectory {
    points: Vec<TrajectoryPoint>,
}

impl DiscretizedTrajectory {
    pub fn new(points: Vec<TrajectoryPoint>) -> Result<Self, PathError> {
        if points.is_empty() {
            return Err(PathError::Empty("trajectory"));
        }
        for (i, p) in points.iter().enumerate() {
            check_finite(i, "relative_time", p.relative_time)?;
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].relative_time <= pair[0].relative_time {
                return Err(PathError::NonIncreasingTime {
                    index: i + 1,
                    prev: pair[0].relative_time,
                    next: pair[1].relative_time,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    fn first(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    fn last(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    /// Time covered from the first to the last sample.
    pub fn temporal_length(&self) -> f64 {
        self.last().relative_time - self.first().relative_time
    }

    /// Arc length covered from the first to the last sample.
    pub fn spatial_length(&self) -> f64 {
        self.last().path_point.s - self.first().path_point.s
    }

    /// Sample at relative time `t` with default tolerances.
    ///
    /// Unlike the pairwise interpolator, the returned `s` is absolute along
    /// the path: the integrated distance is offset by the lower sample's `s`.
    pub fn evaluate(&self, t: f64) -> TrajectoryPoint {
        self.evaluate_with(&Interpolator::default(), t)
            .unwrap_or_else(|err| panic!("trajectory sampling: {err}"))
    }

    pub fn evaluate_with(
        &self,
        interpolator: &Interpolator,
        t: f64,
    ) -> Result<TrajectoryPoint, InterpolationError> {
        let first = self.first();
        let last = self.last();
        if t.is_nan() {
            return Err(InterpolationError::TimeOutOfRange {
                t,
                t0: first.relative_time,
                t1: last.relative_time,
            });
        }
        if t <= first.relative_time {
            return Ok(*first);
        }
        if t >= last.relative_time {
            return Ok(*last);
        }
        let upper = self.points.partition_point(|p| p.relative_time <= t);
        let lower = &self.points[upper - 1];
        let upper = &self.points[upper];
        match interpolator.fit_trajectory_point(lower, upper, t)? {
            Some(mut point) => {
                point.path_point.s += lower.path_point.s;
                Ok(point)
            }
            None => Ok(*upper),
        }
    }
}

impl TryFrom<Vec<TrajectoryPoint>> for DiscretizedTrajectory {
    type Error = PathError;

    fn try_from(points: Vec<TrajectoryPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<DiscretizedTrajectory> for Vec<TrajectoryPoint> {
    fn from(trajectory: DiscretizedTrajectory) -> Self {
        trajectory.points
    }
}
