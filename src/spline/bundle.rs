use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{CubicSpline, DiagonalCache, SplineError};

/// A fixed number of identically-shaped spline channels driven together.
///
/// Each dimension (e.g. x/y/z, or per-axis rotation) is an independent
/// [`CubicSpline`]; all share one point count, one loop flag for the
/// *parameter* axis, and one dirty flag. Mutations mark the bundle dirty and
/// [`solve`](Self::solve) lazily re-solves every channel, so repeated
/// evaluation between edits costs no linear algebra.
///
/// An owner that bakes the dimension count into its own state can lock it
/// with [`lock_dimensions`](Self::lock_dimensions); `redimension` then fails
/// instead of silently corrupting that owner's expectations.
///
/// # Example
///
/// ```
/// use cubis::{DiagonalCache, SplineBundle};
///
/// let mut cache = DiagonalCache::new();
/// let mut b = SplineBundle::new(3);
/// b.resize(2);
/// b.set_point(0, &[0.0_f64, 0.0, 0.0]).unwrap();
/// b.set_point(1, &[1.0, 2.0, 3.0]).unwrap();
/// b.solve(&mut cache);
/// let mid = b.evaluate(0.5);
/// assert!((mid[2] - 1.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct SplineBundle<T> {
    splines: Vec<CubicSpline<T>>,
    looped: bool,
    dirty: bool,
    dimensions_locked: bool,
}

impl<T: FloatScalar> SplineBundle<T> {
    /// Create a bundle of `dimension` empty channels.
    pub fn new(dimension: usize) -> Self {
        Self {
            splines: vec![CubicSpline::new(); dimension],
            looped: false,
            dirty: true,
            dimensions_locked: false,
        }
    }

    /// Re-solve every channel if anything changed since the last solve.
    pub fn solve(&mut self, cache: &mut DiagonalCache<T>) {
        if !self.dirty {
            return;
        }
        if self.looped {
            for spline in &mut self.splines {
                spline.solve_periodic(cache);
            }
        } else {
            for spline in &mut self.splines {
                spline.solve_open(cache);
            }
        }
        self.dirty = false;
    }

    /// Evaluate every channel at parameter `t`.
    pub fn evaluate(&self, t: T) -> Vec<T> {
        self.splines
            .iter()
            .map(|spline| spline.evaluate(t, self.looped))
            .collect()
    }

    /// Evaluate every channel's first derivative at parameter `t`.
    pub fn evaluate_derivative(&self, t: T) -> Vec<T> {
        self.splines
            .iter()
            .map(|spline| spline.evaluate_derivative(t, self.looped))
            .collect()
    }

    /// Set point `i` across all channels from one value per dimension.
    pub fn set_point(&mut self, i: usize, values: &[T]) -> Result<(), SplineError> {
        if values.len() != self.splines.len() {
            return Err(SplineError::DimensionMismatch);
        }
        if i >= self.len() {
            return Err(SplineError::PointOutOfRange);
        }
        for (spline, &v) in self.splines.iter_mut().zip(values) {
            spline.set_point(i, v)?;
        }
        self.dirty = true;
        Ok(())
    }

    /// Overwrite point `i`'s coefficients across all channels.
    pub fn set_coefficients(
        &mut self,
        i: usize,
        b: &[T],
        c: &[T],
        d: &[T],
    ) -> Result<(), SplineError> {
        let dim = self.splines.len();
        if b.len() != dim || c.len() != dim || d.len() != dim {
            return Err(SplineError::DimensionMismatch);
        }
        if i >= self.len() {
            return Err(SplineError::PointOutOfRange);
        }
        for (n, spline) in self.splines.iter_mut().enumerate() {
            spline.set_coefficients(i, b[n], c[n], d[n])?;
        }
        self.dirty = true;
        Ok(())
    }

    /// Point `i`'s coefficients across all channels, as `(b, c, d)` vectors.
    pub fn coefficients(&self, i: usize) -> Result<(Vec<T>, Vec<T>, Vec<T>), SplineError> {
        if i >= self.len() {
            return Err(SplineError::PointOutOfRange);
        }
        let mut b = Vec::with_capacity(self.splines.len());
        let mut c = Vec::with_capacity(self.splines.len());
        let mut d = Vec::with_capacity(self.splines.len());
        for spline in &self.splines {
            let (sb, sc, sd) = spline.coefficients(i)?;
            b.push(sb);
            c.push(sc);
            d.push(sd);
        }
        Ok((b, c, d))
    }

    /// Set the value-domain period of one dimension (0 = non-cyclic).
    pub fn set_spatial_extent(&mut self, dim: usize, extent: T) -> Result<(), SplineError> {
        let spline = self
            .splines
            .get_mut(dim)
            .ok_or(SplineError::DimensionOutOfRange)?;
        spline.set_spatial_extent(extent);
        self.dirty = true;
        Ok(())
    }

    /// The value-domain period of one dimension.
    pub fn spatial_extent(&self, dim: usize) -> Result<T, SplineError> {
        self.splines
            .get(dim)
            .map(|spline| spline.spatial_extent())
            .ok_or(SplineError::DimensionOutOfRange)
    }

    /// Change the point count uniformly across all channels.
    pub fn resize(&mut self, n: usize) {
        for spline in &mut self.splines {
            spline.resize(n);
        }
        self.dirty = true;
    }

    /// Change the dimension count. New channels start at the current point
    /// count with zero values. Fails if the count is locked.
    pub fn redimension(&mut self, dimension: usize) -> Result<(), SplineError> {
        if self.dimensions_locked {
            return Err(SplineError::DimensionsLocked);
        }
        let n = self.len();
        self.splines.resize(dimension, CubicSpline::with_len(n));
        self.dirty = true;
        Ok(())
    }

    /// Number of spline channels.
    pub fn dimension(&self) -> usize {
        self.splines.len()
    }

    /// Number of control points (shared by every channel).
    pub fn len(&self) -> usize {
        self.splines.first().map_or(0, |spline| spline.len())
    }

    /// True if the bundle has no channels or its channels have no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set whether the *parameter* wraps (point `n` coincides with point 0).
    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
        self.dirty = true;
    }

    /// Whether the parameter wraps.
    pub fn looped(&self) -> bool {
        self.looped
    }

    /// Lock or unlock the dimension count. Set by an owner whose own state
    /// assumes a fixed shape; the bundle cannot verify that on its own.
    pub fn lock_dimensions(&mut self, locked: bool) {
        self.dimensions_locked = locked;
    }

    /// Whether the dimension count is locked.
    pub fn dimensions_locked(&self) -> bool {
        self.dimensions_locked
    }
}
