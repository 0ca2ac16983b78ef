use cubis::{loop_distance, CubicSpline, DiagonalCache, SplineBundle};

const TOL: f64 = 1e-12;

fn solved_open(values: &[f64], extent: f64) -> CubicSpline<f64> {
    let mut cache = DiagonalCache::new();
    let mut s = CubicSpline::with_len(values.len());
    s.set_spatial_extent(extent);
    for (i, v) in values.iter().enumerate() {
        s.set_point(i, *v).unwrap();
    }
    s.solve_open(&mut cache);
    s
}

fn solved_periodic(values: &[f64], extent: f64) -> CubicSpline<f64> {
    let mut cache = DiagonalCache::new();
    let mut s = CubicSpline::with_len(values.len());
    s.set_spatial_extent(extent);
    for (i, v) in values.iter().enumerate() {
        s.set_point(i, *v).unwrap();
    }
    s.solve_periodic(&mut cache);
    s
}

// ── Knot interpolation ───────────────────────────────────────────────

#[test]
fn open_curve_passes_through_knots() {
    let values = [0.3, -1.2, 4.0, 2.5, 2.5, -7.0];
    let s = solved_open(&values, 0.0);
    for (i, v) in values.iter().enumerate() {
        assert!(
            (s.evaluate(i as f64, false) - v).abs() < TOL,
            "knot {i}: {} vs {v}",
            s.evaluate(i as f64, false)
        );
    }
}

#[test]
fn periodic_curve_passes_through_knots() {
    let values = [1.0, 0.0, -2.0, 3.0, 0.5];
    let s = solved_periodic(&values, 0.0);
    for (i, v) in values.iter().enumerate() {
        assert!((s.evaluate(i as f64, true) - v).abs() < TOL, "knot {i}");
    }
}

// ── Periodicity ──────────────────────────────────────────────────────

#[test]
fn looped_evaluation_has_period_n() {
    let values = [0.0, 2.0, -1.0, 1.0];
    let s = solved_periodic(&values, 0.0);
    let n = values.len() as f64;
    for k in 0..40 {
        let t = -6.0 + 0.37 * k as f64;
        let base = s.evaluate(t, true);
        assert!((s.evaluate(t + n, true) - base).abs() < TOL, "t = {t}");
        assert!((s.evaluate(t - 2.0 * n, true) - base).abs() < TOL, "t = {t}");
    }
}

// ── Derivative continuity ────────────────────────────────────────────

#[test]
fn open_derivative_continuous_at_interior_knots() {
    let values = [0.0, 3.0, 1.0, -2.0, 4.0, 4.0, 0.5];
    let s = solved_open(&values, 0.0);
    for i in 1..values.len() - 1 {
        let left = s.evaluate_derivative(i as f64 - 1e-7, false);
        let right = s.evaluate_derivative(i as f64, false);
        assert!((left - right).abs() < 1e-4, "knot {i}: {left} vs {right}");
    }
}

#[test]
fn periodic_derivative_continuous_at_all_knots() {
    let values = [0.0, 3.0, 1.0, -2.0, 4.0];
    let s = solved_periodic(&values, 0.0);
    let n = values.len();
    for i in 0..n {
        // Approach knot i from the preceding segment, wrapping at zero.
        let left = s.evaluate_derivative(i as f64 + n as f64 - 1e-7, true);
        let right = s.evaluate_derivative(i as f64, true);
        assert!((left - right).abs() < 1e-4, "knot {i}: {left} vs {right}");
    }
}

// ── Cache transparency ───────────────────────────────────────────────

#[test]
fn shared_cache_is_observationally_equivalent() {
    let values = [5.0, 1.0, -3.0, 2.0, 2.0, 9.0, -1.0, 0.0, 4.0, 6.0];
    let mut shared = DiagonalCache::new();

    let mut first = CubicSpline::with_len(values.len());
    let mut second = CubicSpline::with_len(values.len());
    for (i, v) in values.iter().enumerate() {
        first.set_point(i, *v).unwrap();
        second.set_point(i, 2.0 * v - 1.0).unwrap();
    }
    first.solve_open(&mut shared); // cold
    second.solve_open(&mut shared); // warm

    // The same spline solved through a fresh cache must match bit for bit.
    let mut fresh = DiagonalCache::new();
    let mut control = second.clone();
    control.solve_open(&mut fresh);
    for i in 0..values.len() {
        assert_eq!(second.coefficients(i).unwrap(), control.coefficients(i).unwrap());
    }
}

// ── Angle-channel scenario ───────────────────────────────────────────

#[test]
fn looped_angle_channel_wraps_smoothly() {
    // Four compass headings on a 360-degree value domain.
    let values = [0.0, 90.0, 180.0, 270.0];
    let s = solved_periodic(&values, 360.0);

    assert!((s.evaluate(4.0, true) - s.evaluate(0.0, true)).abs() < TOL);

    // Crossing 270 -> 0 moves the short way: the final segment climbs from
    // 270 to 360 (one wrapped distance of 90) with no jump along the way.
    let mut prev = s.evaluate(3.0, true);
    let mut t = 3.05;
    while t < 4.0 {
        let cur = s.evaluate(t, true);
        assert!((cur - prev).abs() < 20.0, "jump at t = {t}: {prev} -> {cur}");
        prev = cur;
        t += 0.05;
    }
    assert!((s.evaluate(4.0 - 1e-9, true) - 360.0).abs() < 0.5);
}

#[test]
fn two_point_tangent_is_wrapped_distance() {
    let values = [350.0, 10.0];
    let s = solved_open(&values, 360.0);
    let (b0, _, _) = s.coefficients(0).unwrap();
    assert_eq!(b0, loop_distance(10.0, 350.0, 360.0));
}

// ── Bundle end-to-end ────────────────────────────────────────────────

#[test]
fn looped_square_path() {
    let mut cache = DiagonalCache::new();
    let mut path = SplineBundle::new(2);
    path.resize(4);
    path.set_looped(true);
    let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    for (i, corner) in corners.iter().enumerate() {
        path.set_point(i, corner).unwrap();
    }
    path.solve(&mut cache);

    // Hits every corner in every dimension.
    for (i, corner) in corners.iter().enumerate() {
        let p = path.evaluate(i as f64);
        assert!((p[0] - corner[0]).abs() < TOL, "corner {i} x");
        assert!((p[1] - corner[1]).abs() < TOL, "corner {i} y");
    }
    // Wraps around.
    let start = path.evaluate(0.0);
    let wrapped = path.evaluate(4.0);
    assert!((start[0] - wrapped[0]).abs() < TOL);
    assert!((start[1] - wrapped[1]).abs() < TOL);

    // A tangent exists everywhere on a looped path.
    let v = path.evaluate_derivative(2.5);
    assert_eq!(v.len(), 2);
    assert!(v[0].is_finite() && v[1].is_finite());
}

#[test]
fn bundle_redimension_grows_matching_channels() {
    let mut cache = DiagonalCache::new();
    let mut b = SplineBundle::new(1);
    b.resize(3);
    for (i, v) in [0.0_f64, 1.0, 0.0].iter().enumerate() {
        b.set_point(i, &[*v]).unwrap();
    }
    b.redimension(2).unwrap();
    // The new channel shares the point count, so uniform writes succeed.
    b.set_point(1, &[1.0, 5.0]).unwrap();
    b.solve(&mut cache);
    let p = b.evaluate(1.0);
    assert!((p[0] - 1.0).abs() < TOL);
    assert!((p[1] - 5.0).abs() < TOL);
}
