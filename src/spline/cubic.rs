use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{loop_distance, DiagonalCache, SplineError};

/// One knot of a spline: a control value and its solved segment coefficients.
///
/// The curve leaving this point at local parameter `f ∈ [0, 1)` is
/// `a + b·f + c·f² + d·f³`. An open spline's last point never has its
/// outgoing segment evaluated, so its `c`/`d` hold whatever the solve
/// produced for the wrapped segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<T> {
    /// Control value at this knot.
    pub a: T,
    /// Linear coefficient (the tangent at this knot).
    pub b: T,
    /// Quadratic coefficient.
    pub c: T,
    /// Cubic coefficient.
    pub d: T,
}

impl<T: FloatScalar> ControlPoint<T> {
    fn zeroed() -> Self {
        let z = T::zero();
        Self {
            a: z,
            b: z,
            c: z,
            d: z,
        }
    }
}

/// One scalar channel of a parameter-indexed cubic spline.
///
/// Point `i` sits at parameter `t = i`. Mutating points or coefficients does
/// not re-solve; pair mutations with [`solve_open`](Self::solve_open) or
/// [`solve_periodic`](Self::solve_periodic) before evaluating. The spatial
/// extent is the period of the *value* domain (0 = non-cyclic) and is
/// independent of whether parameter evaluation loops.
///
/// # Example
///
/// ```
/// use cubis::{CubicSpline, DiagonalCache};
///
/// let mut cache = DiagonalCache::new();
/// let mut s = CubicSpline::with_len(4);
/// for (i, v) in [0.0_f64, 1.0, -1.0, 0.5].iter().enumerate() {
///     s.set_point(i, *v).unwrap();
/// }
/// s.solve_open(&mut cache);
/// assert!((s.evaluate(2.0, false) - (-1.0)).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    points: Vec<ControlPoint<T>>,
    spatial_extent: T,
}

impl<T: FloatScalar> CubicSpline<T> {
    /// Create an empty spline with a non-cyclic value domain.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            spatial_extent: T::zero(),
        }
    }

    /// Create a spline with `n` zero-valued points.
    pub fn with_len(n: usize) -> Self {
        Self {
            points: vec![ControlPoint::zeroed(); n],
            spatial_extent: T::zero(),
        }
    }

    /// Set the control value of point `i`.
    pub fn set_point(&mut self, i: usize, value: T) -> Result<(), SplineError> {
        let p = self
            .points
            .get_mut(i)
            .ok_or(SplineError::PointOutOfRange)?;
        p.a = value;
        Ok(())
    }

    /// The control value of point `i`.
    pub fn point(&self, i: usize) -> Result<T, SplineError> {
        self.points
            .get(i)
            .map(|p| p.a)
            .ok_or(SplineError::PointOutOfRange)
    }

    /// Overwrite the solved coefficients of point `i`.
    pub fn set_coefficients(&mut self, i: usize, b: T, c: T, d: T) -> Result<(), SplineError> {
        let p = self
            .points
            .get_mut(i)
            .ok_or(SplineError::PointOutOfRange)?;
        p.b = b;
        p.c = c;
        p.d = d;
        Ok(())
    }

    /// The solved coefficients `(b, c, d)` of point `i`.
    pub fn coefficients(&self, i: usize) -> Result<(T, T, T), SplineError> {
        self.points
            .get(i)
            .map(|p| (p.b, p.c, p.d))
            .ok_or(SplineError::PointOutOfRange)
    }

    /// Set the period of the value domain (0 = non-cyclic).
    pub fn set_spatial_extent(&mut self, extent: T) {
        self.spatial_extent = extent;
    }

    /// The period of the value domain (0 = non-cyclic).
    pub fn spatial_extent(&self) -> T {
        self.spatial_extent
    }

    /// Change the point count, zero-filling any new points.
    pub fn resize(&mut self, n: usize) {
        self.points.resize(n, ControlPoint::zeroed());
    }

    /// The control points with their solved coefficients.
    pub fn points(&self) -> &[ControlPoint<T>] {
        &self.points
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the spline has no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Solve coefficients for an open (clamped-boundary) curve.
    pub fn solve_open(&mut self, cache: &mut DiagonalCache<T>) {
        if self.check_minimum_size() {
            return;
        }
        let n = self.points.len();
        let one = T::one();
        let two = one + one;
        let three = two + one;

        let diagonals = cache.open_diagonals(n);

        let mut rhs = vec![T::zero(); n];
        // The first endpoint is clamped, not cyclic: its difference stays
        // unwrapped while the last endpoint wraps like the interior terms.
        // Matching both ends would change the curve shape near t = 0.
        rhs[0] = three * (self.points[1].a - self.points[0].a);
        self.fill_interior_rhs(&mut rhs);
        rhs[n - 1] = three
            * loop_distance(
                self.points[n - 1].a,
                self.points[n - 2].a,
                self.spatial_extent,
            );

        // Forward elimination of the right-hand side, mirroring the diagonal
        // reduction done by the cache. The system looks like
        //   | 2 1 0 0 | = | rhs[0] |
        //   | 1 4 1 0 | = | rhs[1] |
        //   | 0 1 4 1 | = | rhs[2] |
        //   | 0 0 1 2 | = | rhs[3] |
        // The diagonal comes out the same for every spline of this size, so
        // only the value-dependent side is eliminated here.
        rhs[1] = rhs[1] - rhs[0] / two;
        for i in 1..n - 1 {
            rhs[i + 1] = rhs[i + 1] - rhs[i] * (one / diagonals[i]);
        }

        self.set_results(&diagonals, &mut rhs);
    }

    /// Solve coefficients for a periodic (looped-boundary) curve.
    pub fn solve_periodic(&mut self, cache: &mut DiagonalCache<T>) {
        if self.check_minimum_size() {
            return;
        }
        let n = self.points.len();
        let one = T::one();
        let three = one + one + one;

        let diagonals = cache.periodic_diagonals(n);

        let end = n - 1;
        let stop = end - 1;

        let mut rhs = vec![T::zero(); n];
        // Both ends see their true cyclic neighbors.
        rhs[0] = three * loop_distance(self.points[1].a, self.points[end].a, self.spatial_extent);
        self.fill_interior_rhs(&mut rhs);
        rhs[end] = three * loop_distance(self.points[0].a, self.points[stop].a, self.spatial_extent);

        // Same corner bookkeeping as the cached diagonal reduction: the loop
        // carries the residual corner pair forward and stops one row early,
        // where the corner meets the superdiagonal.
        let mut cedge = one;
        let mut redge = one;
        for i in 0..stop {
            let recip = one / diagonals[i];
            rhs[i + 1] = rhs[i + 1] - rhs[i] * recip;
            rhs[end] = rhs[end] - rhs[i] * (redge * recip);
            cedge = -(cedge * recip);
            redge = -(redge * recip);
        }
        let _ = cedge; // consumed only by the diagonal-side correction
        rhs[end] = rhs[end] - rhs[stop] * ((one - redge) / diagonals[stop]);

        self.set_results(&diagonals, &mut rhs);
    }

    /// Handle splines too small (or too flat) for the full solve.
    ///
    /// Returns true when the coefficients are already final: fewer than three
    /// points, or three-plus points that all share one value. Otherwise all
    /// coefficients are cleared and the caller proceeds with the solve.
    fn check_minimum_size(&mut self) -> bool {
        let z = T::zero();
        match self.points.len() {
            0 => true,
            1 => {
                let p = &mut self.points[0];
                p.b = z;
                p.c = z;
                p.d = z;
                true
            }
            2 => {
                // A two-point curve is the linear segment between them; the
                // reverse tangent on point 1 serves the looped case.
                let b0 = loop_distance(self.points[1].a, self.points[0].a, self.spatial_extent);
                let b1 = loop_distance(self.points[0].a, self.points[1].a, self.spatial_extent);
                self.points[0].b = b0;
                self.points[0].c = z;
                self.points[0].d = z;
                self.points[1].b = b1;
                self.points[1].c = z;
                self.points[1].d = z;
                true
            }
            _ => {
                let first = self.points[0].a;
                let mut all_identical = true;
                for p in self.points.iter_mut() {
                    p.b = z;
                    p.c = z;
                    p.d = z;
                    if p.a != first {
                        all_identical = false;
                    }
                }
                all_identical
            }
        }
    }

    /// Interior right-hand-side terms, shared by both boundary modes.
    fn fill_interior_rhs(&self, rhs: &mut [T]) {
        let one = T::one();
        let three = one + one + one;
        for i in 1..self.points.len() - 1 {
            rhs[i] = three
                * loop_distance(
                    self.points[i + 1].a,
                    self.points[i - 1].a,
                    self.spatial_extent,
                );
        }
    }

    /// Turn the eliminated right-hand side into per-point coefficients.
    fn set_results(&mut self, diagonals: &[T], rhs: &mut [T]) {
        let n = self.points.len();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let z = T::zero();

        // Everything off the diagonal is zero now; rhs[i] / d[i] is the
        // tangent-scaling term m[i] at each knot.
        for i in 0..n {
            rhs[i] = rhs[i] / diagonals[i];
        }
        for i in 0..n {
            let next = (i + 1) % n;
            let diff = loop_distance(self.points[next].a, self.points[i].a, self.spatial_extent);
            let b = rhs[i];
            let c = three * diff - two * rhs[i] - rhs[next];
            let d = -(two * diff) + rhs[i] + rhs[next];
            // Degenerate distances (e.g. coincident points in a cyclic
            // domain) can yield NaN; smooth those coefficients to zero.
            self.points[i].b = if b.is_nan() { z } else { b };
            self.points[i].c = if c.is_nan() { z } else { c };
            self.points[i].d = if d.is_nan() { z } else { d };
        }
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// With `looped` the parameter wraps with period `n`; otherwise `t <= 0`
    /// clamps to the first value and `t >= n - 1` to the last. An empty
    /// spline evaluates to zero everywhere.
    pub fn evaluate(&self, t: T, looped: bool) -> T {
        if self.points.is_empty() {
            return T::zero();
        }
        let n = self.points.len();
        let mut t = t;
        if looped {
            let max_t = T::from(n).unwrap();
            while t >= max_t {
                t = t - max_t;
            }
            while t < T::zero() {
                t = t + max_t;
            }
        } else {
            if t <= T::zero() {
                return self.points[0].a;
            }
            if t >= T::from(n - 1).unwrap() {
                return self.points[n - 1].a;
            }
        }
        let i = segment_index(t, n);
        let f = t - T::from(i).unwrap();
        let p = &self.points[i];
        p.a + f * (p.b + f * (p.c + f * p.d))
    }

    /// Evaluate the curve's first derivative at parameter `t`.
    ///
    /// Same wrapping as [`evaluate`](Self::evaluate), but a non-looped curve
    /// is flat beyond either end: out-of-range parameters return zero.
    pub fn evaluate_derivative(&self, t: T, looped: bool) -> T {
        if self.points.is_empty() {
            return T::zero();
        }
        let n = self.points.len();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let mut t = t;
        if looped {
            let max_t = T::from(n).unwrap();
            while t >= max_t {
                t = t - max_t;
            }
            while t < T::zero() {
                t = t + max_t;
            }
        } else if t < T::zero() || t >= T::from(n - 1).unwrap() {
            return T::zero();
        }
        let i = segment_index(t, n);
        let f = t - T::from(i).unwrap();
        let p = &self.points[i];
        p.b + two * p.c * f + three * p.d * f * f
    }
}

impl<T: FloatScalar> Default for CubicSpline<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment index for an in-range parameter: `floor(t)` clamped to the last
/// point.
fn segment_index<T: FloatScalar>(t: T, n: usize) -> usize {
    t.floor().to_usize().unwrap_or(0).min(n - 1)
}
