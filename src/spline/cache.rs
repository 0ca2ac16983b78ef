use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Upper bound on entries kept per boundary-mode pool.
pub const DIAGONAL_CACHE_LIMIT: usize = 16;

/// Memoized diagonals of the reduced spline coefficient matrix.
///
/// Forward elimination of the matrix touches only its diagonal, and the
/// diagonal depends solely on the point count — not on the control values.
/// This cache keeps the last [`DIAGONAL_CACHE_LIMIT`] solved diagonals per
/// boundary mode so that repeated solves of equally-sized splines skip the
/// reduction entirely. Entries are keyed implicitly by their length:
/// newest at the front, oldest evicted when a pool overflows on insert.
/// A lookup hit copies the entry out without reordering the pool.
///
/// The cache is a pure optimization; solving through a cold cache and a warm
/// one produces identical results. It is not internally synchronized — keep
/// one per thread or guard it externally if solves run concurrently.
///
/// # Example
///
/// ```
/// use cubis::{CubicSpline, DiagonalCache};
///
/// let mut cache = DiagonalCache::new();
/// let mut a = CubicSpline::with_len(8);
/// let mut b = CubicSpline::with_len(8);
/// for i in 0..8 {
///     a.set_point(i, i as f64).unwrap();
///     b.set_point(i, (i * i) as f64).unwrap();
/// }
/// a.solve_open(&mut cache); // computes and caches the size-8 diagonal
/// b.solve_open(&mut cache); // reuses it
/// ```
#[derive(Debug, Clone)]
pub struct DiagonalCache<T> {
    pub(crate) open: VecDeque<Vec<T>>,
    pub(crate) periodic: VecDeque<Vec<T>>,
}

impl<T: FloatScalar> DiagonalCache<T> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            open: VecDeque::new(),
            periodic: VecDeque::new(),
        }
    }

    /// Reduced diagonal for an open (clamped-boundary) spline of `n` points.
    ///
    /// The matrix has row factor 2 at both endpoints, 4 on interior rows, and
    /// 1s off the diagonal. Requires `n >= 3`; smaller splines never reach
    /// the linear-algebra path.
    pub fn open_diagonals(&mut self, n: usize) -> Vec<T> {
        debug_assert!(n >= 3);
        if let Some(hit) = find_entry(&self.open, n) {
            return hit;
        }

        let one = T::one();
        let two = one + one;
        let four = two + two;

        let mut d = vec![four; n];
        d[0] = two;
        d[n - 1] = two;

        // Eliminate forward. The second off-diagonal cancels by construction,
        // so only the diagonal itself ever changes.
        d[1] = d[1] - one / two;
        for i in 1..n - 1 {
            d[i + 1] = d[i + 1] - one / d[i];
        }

        insert_entry(&mut self.open, d.clone());
        d
    }

    /// Reduced diagonal for a periodic (looped-boundary) spline of `n` points.
    ///
    /// The periodic matrix is tridiagonal plus two corner entries connecting
    /// the last row/column to the first. Elimination tracks the residual
    /// corner fill-in as a running `(cedge, redge)` pair instead of storing
    /// the full fill-in, keeping the reduction O(n). Requires `n >= 3`.
    pub fn periodic_diagonals(&mut self, n: usize) -> Vec<T> {
        debug_assert!(n >= 3);
        if let Some(hit) = find_entry(&self.periodic, n) {
            return hit;
        }

        let one = T::one();
        let two = one + one;
        let four = two + two;

        let mut d = vec![four; n];

        let end = n - 1;
        let stop = end - 1;
        let mut cedge = one; // residual of the last column in row i
        let mut redge = one; // residual of the last row in column i
        // The step where the corner column meets the superdiagonal needs the
        // closed-form correction below, so the loop stops one row early.
        for i in 0..stop {
            let recip = one / d[i];
            d[i + 1] = d[i + 1] - recip;
            d[end] = d[end] - redge * (cedge * recip);
            cedge = -(cedge * recip);
            redge = -(redge * recip);
        }
        // At this point the remaining corner entries are 1 - cedge and
        // 1 - redge; fold them into the last diagonal in one step.
        d[end] = d[end] - redge * ((one - cedge) / d[stop]);

        insert_entry(&mut self.periodic, d.clone());
        d
    }
}

impl<T: FloatScalar> Default for DiagonalCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a pool for an entry of length `n` and copy it out.
fn find_entry<T: FloatScalar>(pool: &VecDeque<Vec<T>>, n: usize) -> Option<Vec<T>> {
    pool.iter().find(|entry| entry.len() == n).cloned()
}

/// Insert at the front, evicting the oldest entry when the pool is full.
fn insert_entry<T: FloatScalar>(pool: &mut VecDeque<Vec<T>>, entry: Vec<T>) {
    if pool.len() >= DIAGONAL_CACHE_LIMIT {
        pool.pop_back();
    }
    pool.push_front(entry);
}
