use pathkit_math_core::{integrate_by_gauss_legendre, normalize_angle, HermiteSpline};

use super::{InterpolationError, Interpolator};
use crate::types::PathPoint;

impl Interpolator {
    /// Interpolate a path point at arc length `s` in `[p0.s, p1.s]`.
    ///
    /// Heading relative to `p0` is a quintic in arc length matching heading,
    /// curvature and curvature rate at both ends. Position is the integral of
    /// the unit tangent along that heading profile.
    pub fn try_path_point(
        &self,
        p0: &PathPoint,
        p1: &PathPoint,
        s: f64,
    ) -> Result<PathPoint, InterpolationError> {
        let (s0, s1) = (p0.s, p1.s);
        if !(s0 <= s && s <= s1) {
            return Err(InterpolationError::OutOfRange { s, s0, s1 });
        }
        // No span to fit over.
        if s1 - s0 < self.config.degenerate_span_tolerance {
            return Ok(PathPoint { s, ..*p0 });
        }

        let theta_diff = normalize_angle(p1.theta - p0.theta);
        let geometry = HermiteSpline::quintic(
            [0.0, p0.kappa, p0.dkappa],
            [theta_diff, p1.kappa, p1.dkappa],
            s0,
            s1,
        )?;
        let heading = |u: f64| geometry.evaluate(0, u) + p0.theta;

        let x = p0.x + integrate_by_gauss_legendre(|u| heading(u).cos(), s0, s);
        let y = p0.y + integrate_by_gauss_legendre(|u| heading(u).sin(), s0, s);

        Ok(PathPoint {
            x,
            y,
            theta: normalize_angle(heading(s)),
            kappa: geometry.evaluate(1, s),
            dkappa: geometry.evaluate(2, s),
            ddkappa: geometry.evaluate(3, s),
            s,
        })
    }
}
