use super::path::*;
use super::super::curve::*;

///
/// Splits a path into the bezier curves that make it up
///
/// Each curve starts where the previous one ended (the first starts at the start point of the path).
///
pub fn path_to_curves<Path: BezierPath, Curve: BezierCurveFactory<Point=Path::Point>>(path: &Path) -> impl Iterator<Item=Curve> {
    path.points()
        .scan(path.start_point(), |last_point, (cp1, cp2, end_point)| {
            let start_point = *last_point;
            *last_point     = end_point;

            Some(Curve::from_points(start_point, (cp1, cp2), end_point))
        })
}
