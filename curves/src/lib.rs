//!
//! # flo_curves
//!
//! Routines for manipulating cubic bezier curves. The `spline` module generates a smooth curve that passes
//! through a list of knots, in either an open or a closed (cyclic) form:
//!
//! ```
//! use flo_curves::*;
//! use flo_curves::bezier::*;
//! use flo_curves::spline::*;
//!
//! let knots               = vec![Coord2(0.0, 1.0), Coord2(3.0, 1.0), Coord2(2.0, 3.0), Coord2(1.5, 0.0)];
//! let curves: Vec<Curve<Coord2>> = spline_through(&knots, false).unwrap();
//!
//! assert!(curves.len() == 3);
//! assert!(curves[1].start_point() == Coord2(3.0, 1.0));
//! ```
//!

#![warn(bare_trait_objects)]

pub mod bezier;
pub mod spline;

pub mod coordinate;
pub use self::coordinate::*;

pub use self::bezier::BezierCurve;
