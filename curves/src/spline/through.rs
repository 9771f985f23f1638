use super::trace::*;
use super::error::*;
use super::tridiagonal::*;
use super::super::bezier::*;
use super::super::bezier::path::*;
use super::super::coordinate::*;

use itertools::izip;
use log::{debug, warn};

///
/// Returns the number of curve sections in a spline through the specified number of knots
///
/// An open spline has one section fewer than it has knots, and a closed one has one section per knot (the last
/// section joins the final knot back to the first).
///
#[inline]
pub fn segment_count(knot_count: usize, cyclic: bool) -> usize {
    if cyclic {
        knot_count
    } else {
        knot_count.saturating_sub(1)
    }
}

///
/// Returns the right-hand side of the spline system for a set of knots, as separate x and y vectors
///
/// There is one row per section of the spline. For a closed spline every row is `4·K[i] + 2·K[i+1]`. For an
/// open spline the first row is `K[0] + 2·K[1]`, the interior rows are as for the closed spline and the last
/// row is `8·K[n-1] + K[n]`. An open spline with a single section only has the last row, `8·K[0] + K[1]`.
///
pub fn spline_coefficients<Point: Coordinate2D>(knots: &[Point], cyclic: bool) -> (Vec<f64>, Vec<f64>) {
    let n       = segment_count(knots.len(), cyclic);
    let mut rx  = vec![0.0; n];
    let mut ry  = vec![0.0; n];

    if cyclic {
        for i in 0..n {
            let j = (i+1) % n;

            rx[i] = 4.0*knots[i].x() + 2.0*knots[j].x();
            ry[i] = 4.0*knots[i].y() + 2.0*knots[j].y();
        }
    } else if n == 1 {
        rx[0] = 8.0*knots[0].x() + knots[1].x();
        ry[0] = 8.0*knots[0].y() + knots[1].y();
    } else if n > 1 {
        rx[0] = knots[0].x() + 2.0*knots[1].x();
        ry[0] = knots[0].y() + 2.0*knots[1].y();

        for i in 1..(n-1) {
            rx[i] = 4.0*knots[i].x() + 2.0*knots[i+1].x();
            ry[i] = 4.0*knots[i].y() + 2.0*knots[i+1].y();
        }

        rx[n-1] = 8.0*knots[n-1].x() + knots[n].x();
        ry[n-1] = 8.0*knots[n-1].y() + knots[n].y();
    }

    (rx, ry)
}

///
/// Generates a smooth series of bezier curves passing through the specified knots
///
/// For an open curve (`cyclic` is false) there are `knots.len()-1` curves and the curvature at either end is zero.
/// For a closed curve there are `knots.len()` curves and the last one ends at the first knot. The curves are
/// returned in order, and the first and second derivatives match wherever two curves meet.
///
/// No attempt is made to repair degenerate input: knots that are infinite or NaN produce control points that are
/// infinite or NaN, and repeated knots produce a loop or a cusp.
///
#[inline]
pub fn spline_through<Curve>(knots: &[Curve::Point], cyclic: bool) -> Result<Vec<Curve>, SplineError>
where   Curve:          BezierCurveFactory,
        Curve::Point:   Coordinate2D {
    spline_through_with_trace(knots, cyclic, &mut NoTrace)
}

///
/// As for `spline_through`, but reports the rows of the tridiagonal solver to a trace
///
pub fn spline_through_with_trace<Curve, Trace>(knots: &[Curve::Point], cyclic: bool, trace: &mut Trace) -> Result<Vec<Curve>, SplineError>
where   Curve:          BezierCurveFactory,
        Curve::Point:   Coordinate2D,
        Trace:          SolverTrace {
    if knots.len() < 2 {
        return Err(SplineError::TooFewKnots(knots.len()));
    }

    let n           = segment_count(knots.len(), cyclic);
    let (rx, ry)    = spline_coefficients(knots, cyclic);

    debug!("Generating {} spline through {} knots ({} sections)", if cyclic { "closed" } else { "open" }, knots.len(), n);

    // Solve for the first control point of each section
    let first_control_points: Vec<Curve::Point> = if n == 1 {
        // Single open section: the last row eliminated against itself, which reduces to 9·P = 8·K[0] + K[1]
        vec![<Curve::Point as Coordinate>::from_components(&[rx[0]/9.0, ry[0]/9.0])]
    } else {
        let (px, py) = solve_tridiagonal_with_trace(&rx, &ry, cyclic, trace)?;

        izip!(px, py)
            .map(|(x, y)| <Curve::Point as Coordinate>::from_components(&[x, y]))
            .collect()
    };

    if first_control_points.iter().any(|cp| !cp.is_finite()) {
        warn!("Spline through {} knots has non-finite control points (some knots are not finite)", knots.len());
    }

    // The second control point is the reflection of the next section's first control point through the knot they share
    let second_control_points = (0..n)
        .map(|i| {
            if i < n-1 {
                knots[i+1]*2.0 - first_control_points[i+1]
            } else if cyclic {
                knots[0]*2.0 - first_control_points[0]
            } else {
                // No following section at the open end: use the midpoint between the last knot and the first control point
                (knots[n] + first_control_points[n-1])*0.5
            }
        });

    let curves = izip!(0..n, first_control_points.iter(), second_control_points)
        .map(|(i, cp1, cp2)| {
            let end = knots[(i+1) % knots.len()];
            Curve::from_points(knots[i], (*cp1, cp2), end)
        })
        .collect();

    Ok(curves)
}

///
/// Generates a smooth bezier path passing through the specified knots
///
/// The path starts at the first knot, and has the same curves as would be generated by `spline_through`.
///
#[inline]
pub fn spline_path_through<Path>(knots: &[Path::Point], cyclic: bool) -> Result<Path, SplineError>
where   Path:           BezierPathFactory,
        Path::Point:    Coordinate2D {
    spline_path_through_with_trace(knots, cyclic, &mut NoTrace)
}

///
/// As for `spline_path_through`, but reports the rows of the tridiagonal solver to a trace
///
pub fn spline_path_through_with_trace<Path, Trace>(knots: &[Path::Point], cyclic: bool, trace: &mut Trace) -> Result<Path, SplineError>
where   Path:           BezierPathFactory,
        Path::Point:    Coordinate2D,
        Trace:          SolverTrace {
    let curves: Vec<Curve<Path::Point>> = spline_through_with_trace(knots, cyclic, trace)?;

    Ok(Path::from_points(knots[0], curves.into_iter()
        .map(|curve| {
            let (cp1, cp2) = curve.control_points();
            (cp1, cp2, curve.end_point())
        })))
}
