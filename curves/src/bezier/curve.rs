use super::basis::*;

use super::super::coordinate::*;

///
/// Trait implemented by bezier curves that can create new versions of themselves
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve of the same type from some points
    ///
    fn from_points(start: Self::Point, control_points: (Self::Point, Self::Point), end: Self::Point) -> Self;

    ///
    /// Creates a new bezier curve of this type from an equivalent curve of another type
    ///
    #[inline]
    fn from_curve<Curve: BezierCurve<Point=Self::Point>>(curve: &Curve) -> Self {
        Self::from_points(curve.start_point(), curve.control_points(), curve.end_point())
    }
}

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve: Geo+Clone+Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Self::Point, Self::Point);

    ///
    /// Reverses the direction of this curve
    ///
    fn reverse<Curve: BezierCurveFactory<Point=Self::Point>>(self) -> Curve {
        let (cp1, cp2) = self.control_points();
        Curve::from_points(self.end_point(), (cp2, cp1), self.start_point())
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let control_points = self.control_points();
        basis(t, self.start_point(), control_points.0, control_points.1, self.end_point())
    }

    ///
    /// Given a value t from 0 to 1, returns the first derivative of this curve at that point
    ///
    /// This is not normalized: its length reflects how fast the curve is moving at this point
    ///
    #[inline]
    fn tangent_at_pos(&self, t: f64) -> Self::Point {
        let (d1, d2, d3) = self.derivative_hull();

        de_casteljau3(t, d1, d2, d3)
    }

    ///
    /// Given a value t from 0 to 1, returns the second derivative of this curve at that point
    ///
    #[inline]
    fn second_derivative_at_pos(&self, t: f64) -> Self::Point {
        let (d1, d2, d3) = self.derivative_hull();

        de_casteljau2(t, (d2-d1)*2.0, (d3-d2)*2.0)
    }

    ///
    /// The control points of the first derivative of this curve (which is a quadratic bezier curve)
    ///
    #[inline]
    fn derivative_hull(&self) -> (Self::Point, Self::Point, Self::Point) {
        let start       = self.start_point();
        let end         = self.end_point();
        let (cp1, cp2)  = self.control_points();

        ((cp1-start)*3.0, (cp2-cp1)*3.0, (end-cp2)*3.0)
    }
}

///
/// Represents a Bezier curve
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub end_point:      Coord,
    pub control_points: (Coord, Coord)
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> BezierCurveFactory for Curve<Coord> {
    fn from_points(start: Coord, (control_point1, control_point2): (Coord, Coord), end: Coord) -> Self {
        Curve {
            start_point:    start,
            control_points: (control_point1, control_point2),
            end_point:      end
        }
    }
}

impl<Coord: Coordinate> BezierCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord, Coord) {
        self.control_points
    }
}
