use pathkit_planning_core::{
    ArcSpanCheck, DiscretizedPath, DiscretizedTrajectory, InterpolationConfig,
    InterpolationError, Interpolator,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn path(name: &str) -> DiscretizedPath {
    pathkit_test_fixtures::paths::load(name).expect("load path fixture")
}

fn trajectory(name: &str) -> DiscretizedTrajectory {
    pathkit_test_fixtures::trajectories::load(name).expect("load trajectory fixture")
}

#[test]
fn path_fixtures_deserialize_and_validate() {
    for name in pathkit_test_fixtures::paths::keys() {
        let path = path(&name);
        assert!(path.points().len() >= 2, "{name} too short");
        assert!(path.length() > 0.0, "{name} has no length");
    }
}

#[test]
fn path_lookup_uses_the_bracketing_segment() {
    let arc = path("circle-arc");
    assert_eq!(arc.length(), 15.0);
    let out = arc.evaluate(7.5);
    approx(out.x, 7.325450581720951, 1e-9);
    approx(out.y, 1.3898475617537143, 1e-9);
    approx(out.theta, 0.375, 1e-12);
    assert_eq!(out.s, 7.5);
}

#[test]
fn path_queries_clamp_to_the_ends() {
    let arc = path("circle-arc");
    let points = arc.points();
    assert_eq!(arc.evaluate(-3.0), points[0]);
    assert_eq!(arc.evaluate(0.0), points[0]);
    assert_eq!(arc.evaluate(15.0), points[3]);
    assert_eq!(arc.evaluate(99.0), points[3]);
}

#[test]
fn path_sample_on_interior_knot_comes_from_the_next_segment() {
    let arc = path("circle-arc");
    let knot = arc.points()[1];
    let out = arc.evaluate(knot.s);
    approx(out.x, knot.x, 1e-12);
    approx(out.y, knot.y, 1e-12);
    approx(out.theta, knot.theta, 1e-12);
}

#[test]
fn clothoid_sweep_keeps_curvature_continuous() {
    let clothoid = path("clothoid");
    let mut prev = clothoid.evaluate(0.0);
    for i in 1..=400 {
        let s = 0.05 * i as f64;
        let out = clothoid.evaluate(s);
        assert!(
            (out.kappa - prev.kappa).abs() < 1e-3,
            "kappa jumps between s={} and s={s}",
            prev.s
        );
        // kappa(s) = 0.02 + 0.004 s along the whole curve.
        approx(out.kappa, 0.02 + 0.004 * s, 1e-9);
        prev = out;
    }
}

#[test]
fn clothoid_second_segment_matches_closed_form() {
    let out = path("clothoid").evaluate(15.0);
    approx(out.theta, 0.75, 1e-9);
    approx(out.x, 13.991877189191408, 1e-8);
    approx(out.y, 4.317208099194086, 1e-8);
}

#[test]
fn trajectory_station_is_absolute() {
    let accel = trajectory("straight-accelerating");
    assert_eq!(accel.temporal_length(), 2.0);
    assert_eq!(accel.spatial_length(), 6.0);
    let out = accel.evaluate(1.5);
    approx(out.path_point.s, 3.75, 1e-12);
    approx(out.path_point.x, 3.75 * 0.3f64.cos(), 1e-12);
    approx(out.path_point.y, 3.75 * 0.3f64.sin(), 1e-12);
    approx(out.v, 4.0, 1e-12);
    assert_eq!(out.relative_time, 1.5);
}

#[test]
fn trajectory_queries_clamp_to_the_ends() {
    let turn = trajectory("constant-speed-turn");
    let points = turn.points();
    assert_eq!(turn.evaluate(-1.0), points[0]);
    assert_eq!(turn.evaluate(5.0), points[2]);
}

#[test]
fn degenerate_trajectory_segment_yields_upper_point() {
    let dup = trajectory("duplicate-station");
    assert_eq!(dup.evaluate(0.25), dup.points()[1]);
}

#[test]
fn rejecting_interpolator_surfaces_inconsistent_segments() {
    let json = r#"[
        { "path_point": { "s": 0.0 }, "v": 1.0, "relative_time": 0.0 },
        { "path_point": { "x": 5.0, "s": 5.0 }, "v": 1.0, "relative_time": 1.0 }
    ]"#;
    let bad: DiscretizedTrajectory = serde_json::from_str(json).expect("valid ordering");
    let strict = Interpolator::new(InterpolationConfig {
        arc_span_check: ArcSpanCheck::Reject,
        ..InterpolationConfig::default()
    });
    assert!(bad.evaluate_with(&strict, 0.5).is_err());
    assert!(bad.evaluate_with(&Interpolator::default(), 0.5).is_ok());
}

#[test]
fn unordered_trajectory_fails_to_deserialize() {
    let json = r#"[
        { "relative_time": 1.0 },
        { "relative_time": 0.5 }
    ]"#;
    assert!(serde_json::from_str::<DiscretizedTrajectory>(json).is_err());
}

#[test]
fn nan_time_query_is_an_error() {
    let turn = trajectory("constant-speed-turn");
    let err = turn
        .evaluate_with(&Interpolator::default(), f64::NAN)
        .expect_err("nan time");
    match err {
        InterpolationError::TimeOutOfRange { t, t0, t1 } => {
            assert!(t.is_nan());
            assert_eq!((t0, t1), (0.0, 2.0));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
#[should_panic(expected = "outside the bounding interval")]
fn nan_station_query_panics_with_range_message() {
    path("circle-arc").evaluate(f64::NAN);
}
