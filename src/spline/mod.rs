//! Parameter-indexed cubic splines for animation and motion paths.
//!
//! The parameter axis is the point index: point `i` sits at `t = i`, and each
//! segment carries a cubic `a + b·f + c·f² + d·f³` in the fractional part
//! `f = t - i`. Curves come in two boundary modes:
//!
//! - **open**: clamped endpoints, evaluation clamps outside `[0, n-1]`;
//! - **periodic**: the last point connects back to the first, evaluation wraps
//!   with period `n`.
//!
//! Independently of the parameter, control *values* may live in a cyclic
//! domain (a "spatial extent", e.g. 360 for degrees): all point differences
//! are then taken through [`loop_distance`], so a rotation channel crosses
//! 350° → 10° the short way instead of unwinding.
//!
//! Solving is split in two: the reduction of the coefficient matrix depends
//! only on the point count and is memoized in a [`DiagonalCache`]; the
//! value-dependent right-hand side is eliminated per solve and folded into
//! per-point coefficients. After a solve, evaluation is pure polynomial
//! arithmetic.
//!
//! # Examples
//!
//! ```
//! use cubis::{DiagonalCache, SplineBundle};
//!
//! // A looped 2-D path through four waypoints.
//! let mut cache = DiagonalCache::new();
//! let mut path = SplineBundle::new(2);
//! path.resize(4);
//! path.set_looped(true);
//! path.set_point(0, &[0.0_f64, 0.0]).unwrap();
//! path.set_point(1, &[1.0, 0.0]).unwrap();
//! path.set_point(2, &[1.0, 1.0]).unwrap();
//! path.set_point(3, &[0.0, 1.0]).unwrap();
//! path.solve(&mut cache);
//!
//! let p = path.evaluate(0.5);
//! assert_eq!(p.len(), 2);
//! ```

mod bundle;
mod cache;
mod cubic;


pub use bundle::SplineBundle;
pub use cache::{DiagonalCache, DIAGONAL_CACHE_LIMIT};
pub use cubic::{ControlPoint, CubicSpline};

use crate::traits::FloatScalar;

/// Errors from contract violations on spline operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineError {
    /// Point index is not less than the number of points.
    PointOutOfRange,
    /// Dimension index is not less than the number of dimensions.
    DimensionOutOfRange,
    /// A per-dimension slice does not match the bundle's dimension count.
    DimensionMismatch,
    /// `redimension` on a bundle whose dimension count is locked by its owner.
    DimensionsLocked,
}

impl core::fmt::Display for SplineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SplineError::PointOutOfRange => {
                write!(f, "point index must be less than the number of points")
            }
            SplineError::DimensionOutOfRange => {
                write!(f, "dimension index must be less than the number of dimensions")
            }
            SplineError::DimensionMismatch => {
                write!(f, "per-dimension values must match the bundle dimension")
            }
            SplineError::DimensionsLocked => {
                write!(f, "bundle dimension count is locked by its owner")
            }
        }
    }
}

/// Shortest signed difference `a - b` in a cyclic value domain of period
/// `extent`.
///
/// Returns whichever of `a - (b + extent)` and `a - (b - extent)` has the
/// smaller magnitude. Exactly those two candidates are compared — with
/// `extent == 0` both collapse to the plain difference, and the plain
/// difference is otherwise never considered, so for `a == b` with a nonzero
/// extent the result is `+extent` (a full lap), not zero. Spline solving
/// relies on this exact candidate set.
///
/// # Examples
///
/// ```
/// use cubis::loop_distance;
///
/// // Angle channel: 350° → 10° crosses zero the short way.
/// assert_eq!(loop_distance(10.0_f64, 350.0, 360.0), 20.0);
/// assert_eq!(loop_distance(350.0_f64, 10.0, 360.0), -20.0);
///
/// // Non-cyclic domain: extent 0 is the plain difference.
/// assert_eq!(loop_distance(7.0_f64, 3.0, 0.0), 4.0);
/// ```
pub fn loop_distance<T: FloatScalar>(a: T, b: T, extent: T) -> T {
    let plus_diff = a - (b + extent);
    let minus_diff = a - (b - extent);
    if plus_diff.abs() < minus_diff.abs() {
        plus_diff
    } else {
        minus_diff
    }
}
