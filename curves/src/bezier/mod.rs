//!
//! # Routines for describing and querying bezier curves
//!
//! The `BezierCurve` trait describes a cubic bezier curve by its start point, end point and two control points.
//! `Curve` is the default implementation, and `BezierCurveFactory` lets the routines that generate curves
//! (such as `spline::spline_through`) produce any type of curve.
//!

mod curve;
mod basis;

pub mod path;

pub use self::curve::*;
pub use self::basis::*;

pub use super::coordinate::*;
