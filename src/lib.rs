//! # cubis
//!
//! Cubic-spline interpolation engine for animation and motion paths. Control
//! points are indexed by their position in the sequence (the parameter axis is
//! `0, 1, 2, …`), curves may loop back on themselves, and control values may
//! live in a cyclic domain such as angles. No-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use cubis::{CubicSpline, DiagonalCache};
//!
//! let mut cache = DiagonalCache::new();
//! let mut spline = CubicSpline::with_len(3);
//! spline.set_point(0, 0.0_f64).unwrap();
//! spline.set_point(1, 10.0).unwrap();
//! spline.set_point(2, 0.0).unwrap();
//! spline.solve_open(&mut cache);
//!
//! assert!((spline.evaluate(1.0, false) - 10.0).abs() < 1e-14);
//! ```
//!
//! ## Modules
//!
//! - [`spline`] — the engine: [`CubicSpline`] (one scalar channel),
//!   [`SplineBundle`] (N channels driven together, e.g. x/y/z), and
//!   [`DiagonalCache`] (memoized matrix reduction, see below).
//!
//! - [`traits`] — element trait hierarchy: [`Scalar`] and [`FloatScalar`]
//!   (real floats, `f32` / `f64`).
//!
//! ## The diagonal cache
//!
//! Solving a spline of `n` points reduces a tridiagonal matrix (periodic
//! curves add two corner entries) whose diagonal depends only on `n`, never on
//! the control values. [`DiagonalCache`] memoizes that reduction per point
//! count and boundary mode, bounded to 16 entries per mode. The cache is an
//! explicit object passed to the solve calls — it is a pure optimization and
//! never required for correctness, so share one per thread or make a fresh one
//! whenever convenient.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via the system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod spline;
pub mod traits;

pub use spline::{
    loop_distance, ControlPoint, CubicSpline, DiagonalCache, SplineBundle, SplineError,
};
pub use traits::{FloatScalar, Scalar};
