use std::f64::consts::PI;

use pathkit_planning_core::{
    interpolate_path_point, try_interpolate_path_point, InterpolationError, PathPoint,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn load(name: &str) -> Vec<PathPoint> {
    pathkit_test_fixtures::paths::load(name).expect("load path fixture")
}

#[test]
fn reproduces_start_point_at_lower_bound() {
    let points = load("clothoid");
    let (p0, p1) = (&points[0], &points[1]);
    let out = interpolate_path_point(p0, p1, p0.s);
    approx(out.x, p0.x, 1e-12);
    approx(out.y, p0.y, 1e-12);
    approx(out.theta, p0.theta, 1e-12);
    approx(out.kappa, p0.kappa, 1e-12);
    approx(out.dkappa, p0.dkappa, 1e-12);
    assert_eq!(out.s, p0.s);
}

#[test]
fn reaches_end_point_at_upper_bound() {
    let points = load("clothoid");
    for pair in points.windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        let out = interpolate_path_point(p0, p1, p1.s);
        approx(out.x, p1.x, 1e-6);
        approx(out.y, p1.y, 1e-6);
        approx(out.theta, p1.theta, 1e-9);
        approx(out.kappa, p1.kappa, 1e-9);
        approx(out.dkappa, p1.dkappa, 1e-9);
        assert_eq!(out.s, p1.s);
    }
}

#[test]
fn follows_a_circular_arc() {
    let points = load("circle-arc");
    let out = interpolate_path_point(&points[0], &points[1], 2.5);
    approx(out.x, 2.4934946677045535, 1e-10);
    approx(out.y, 0.1560466554134199, 1e-10);
    approx(out.theta, 0.125, 1e-12);
    approx(out.kappa, 0.05, 1e-12);
    approx(out.dkappa, 0.0, 1e-12);
    approx(out.ddkappa, 0.0, 1e-12);
}

#[test]
fn clothoid_heading_and_position_match_closed_form() {
    let points = load("clothoid");
    let out = interpolate_path_point(&points[0], &points[1], 5.0);
    // theta(s) = 0.02 s + 0.002 s^2
    approx(out.theta, 0.15, 1e-12);
    approx(out.kappa, 0.04, 1e-12);
    approx(out.dkappa, 0.004, 1e-12);
    approx(out.ddkappa, 0.0, 1e-12);
    approx(out.x, 4.984183679890919, 1e-8);
    approx(out.y, 0.3327563727517706, 1e-8);
}

#[test]
fn output_station_equals_query() {
    let points = load("clothoid");
    for i in 0..=20 {
        let s = 10.0 + 0.5 * i as f64;
        assert_eq!(interpolate_path_point(&points[1], &points[2], s).s, s);
    }
}

#[test]
fn heading_wraps_the_short_way_across_pi() {
    let points = load("heading-wrap");
    let (p0, p1) = (&points[0], &points[1]);
    for i in 0..=10 {
        let s = 0.1 * i as f64;
        let theta = interpolate_path_point(p0, p1, s).theta;
        assert!(theta > -PI && theta <= PI, "theta {theta} not normalized");
        assert!(theta.abs() >= 3.0 - 1e-9, "theta {theta} swept the long way");
    }
    let mid = interpolate_path_point(p0, p1, 0.5).theta;
    approx(mid.abs(), PI, 1e-9);
}

#[test]
fn curvature_is_continuous_across_segments() {
    let points = load("clothoid");
    let left = interpolate_path_point(&points[0], &points[1], 10.0);
    let right = interpolate_path_point(&points[1], &points[2], 10.0);
    approx(left.kappa, right.kappa, 1e-9);
    approx(left.dkappa, right.dkappa, 1e-9);
    approx(left.theta, right.theta, 1e-9);
}

#[test]
fn coincident_bounds_return_start_at_query() {
    let p0 = PathPoint::new(1.0, 2.0, 0.5, 4.0).with_curvature(0.1, 0.0, 0.0);
    let p1 = PathPoint::new(1.0, 2.0, 0.7, 4.0);
    let out = interpolate_path_point(&p0, &p1, 4.0);
    assert_eq!(out, PathPoint { s: 4.0, ..p0 });
}

#[test]
fn query_outside_bounds_is_an_error() {
    let points = load("circle-arc");
    let err = try_interpolate_path_point(&points[0], &points[1], 5.5).expect_err("out of range");
    assert_eq!(
        err,
        InterpolationError::OutOfRange {
            s: 5.5,
            s0: 0.0,
            s1: 5.0
        }
    );
    assert!(try_interpolate_path_point(&points[0], &points[1], f64::NAN).is_err());
}

#[test]
#[should_panic(expected = "outside the bounding interval")]
fn plain_entry_point_panics_outside_bounds() {
    let points = load("circle-arc");
    interpolate_path_point(&points[0], &points[1], -1.0);
}
