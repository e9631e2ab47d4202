use log::warn;
use pathkit_math_core::{integrate_by_gauss_legendre, normalize_angle, HermiteSpline};

use super::{InterpolationError, Interpolator};
use crate::config::ArcSpanCheck;
use crate::types::{PathPoint, TrajectoryPoint};

impl Interpolator {
    /// Interpolate a trajectory point at relative time `t`.
    ///
    /// Speed is a cubic in time matching speed and acceleration at both ends;
    /// its integral gives the arc length travelled. Heading is a cubic in that
    /// arc length matching heading and curvature at both ends, and position is
    /// integrated along it from `tp0`. The returned `s` is measured from `tp0`.
    ///
    /// Bounds whose path arc lengths coincide return `tp1` unchanged.
    pub fn try_trajectory_point(
        &self,
        tp0: &TrajectoryPoint,
        tp1: &TrajectoryPoint,
        t: f64,
    ) -> Result<TrajectoryPoint, InterpolationError> {
        Ok(self.fit_trajectory_point(tp0, tp1, t)?.unwrap_or(*tp1))
    }

    /// `Ok(None)` when the bounds span no distance and nothing can be fitted.
    pub(crate) fn fit_trajectory_point(
        &self,
        tp0: &TrajectoryPoint,
        tp1: &TrajectoryPoint,
        t: f64,
    ) -> Result<Option<TrajectoryPoint>, InterpolationError> {
        let pp0 = &tp0.path_point;
        let pp1 = &tp1.path_point;
        let tolerance = self.config.degenerate_span_tolerance;
        if (pp1.s - pp0.s).abs() < tolerance {
            return Ok(None);
        }

        let (t0, t1) = (tp0.relative_time, tp1.relative_time);
        let dynamics = HermiteSpline::cubic([tp0.v, tp0.a], [tp1.v, tp1.a], t0, t1)?;
        let speed = |tau: f64| dynamics.evaluate(0, tau);

        let span = integrate_by_gauss_legendre(speed, t0, t1);
        let s = integrate_by_gauss_legendre(speed, t0, t);
        self.check_arc_span(span, pp1.s - pp0.s)?;

        if span < tolerance {
            warn!(
                "trajectory interpolation: speed profile covers {span} m between t={t0} and \
                 t={t1}; returning the later point"
            );
            return Ok(None);
        }

        let theta_end = pp0.theta + normalize_angle(pp1.theta - pp0.theta);
        let geometry =
            HermiteSpline::cubic([pp0.theta, pp0.kappa], [theta_end, pp1.kappa], 0.0, span)?;
        let heading = |u: f64| geometry.evaluate(0, u);

        let x = pp0.x + integrate_by_gauss_legendre(|u| heading(u).cos(), 0.0, s);
        let y = pp0.y + integrate_by_gauss_legendre(|u| heading(u).sin(), 0.0, s);

        Ok(Some(TrajectoryPoint {
            path_point: PathPoint {
                x,
                y,
                theta: normalize_angle(heading(s)),
                kappa: geometry.evaluate(1, s),
                dkappa: geometry.evaluate(2, s),
                ddkappa: geometry.evaluate(3, s),
                s,
            },
            v: dynamics.evaluate(0, t),
            a: dynamics.evaluate(1, t),
            relative_time: t,
        }))
    }

    fn check_arc_span(&self, integrated: f64, sampled: f64) -> Result<(), InterpolationError> {
        let tolerance = self.config.arc_span_tolerance;
        if (integrated - sampled).abs() <= tolerance {
            return Ok(());
        }
        match self.config.arc_span_check {
            ArcSpanCheck::Ignore => Ok(()),
            ArcSpanCheck::Warn => {
                warn!(
                    "trajectory interpolation: integrated arc span {integrated} differs from \
                     sampled span {sampled} (tolerance {tolerance})"
                );
                Ok(())
            }
            ArcSpanCheck::Reject => Err(InterpolationError::InconsistentArcSpan {
                integrated,
                sampled,
                tolerance,
            }),
        }
    }
}
