//!
//! # Smooth splines through a set of knots
//!
//! `spline_through` generates a series of cubic bezier curves that pass through every one of a list of knots, with
//! the first and second derivatives matching wherever two curves meet. The curve can either be open, where the
//! ends have zero curvature, or closed (cyclic), where the last knot joins back up with the first.
//!
//! The first control point of each curve is found by solving a tridiagonal system of equations (see
//! `solve_tridiagonal`). The second control point follows from the first control point of the next curve.
//!

mod error;
mod trace;
mod through;
mod tridiagonal;

pub use self::error::*;
pub use self::trace::*;
pub use self::through::*;
pub use self::tridiagonal::*;
