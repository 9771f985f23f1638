//!
//! # Bezier paths
//!
//! A path is a start point followed by a series of `(control_point1, control_point2, end_point)` triples,
//! each describing a curve that continues on from the end of the previous one.
//!

mod path;
mod to_curves;

pub use self::path::*;
pub use self::to_curves::*;
