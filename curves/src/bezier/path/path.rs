use super::super::super::coordinate::*;

use std::vec;

///
/// Trait representing a path made out of bezier sections
/// 
pub trait BezierPath : Clone+Sized {
    /// The type of a point in this path
    type Point: Coordinate;

    /// Type of an iterator over the points in this curve. This tuple contains the points ordered as a hull: ie, two control points followed by a point on the curve
    type PointIter: Iterator<Item=(Self::Point, Self::Point, Self::Point)>;

    ///
    /// Retrieves the initial point of this path
    /// 
    fn start_point(&self) -> Self::Point;

    ///
    /// Retrieves an iterator over the points in this path
    /// 
    fn points(&self) -> Self::PointIter;
}

///
/// Trait implemented by types that can construct new bezier paths
///
pub trait BezierPathFactory : BezierPath {
    ///
    /// Creates a new instance of this path from a set of points
    /// 
    fn from_points<FromIter: IntoIterator<Item=(Self::Point, Self::Point, Self::Point)>>(start_point: Self::Point, points: FromIter) -> Self;
}

///
/// The simplest bezier path representation is just a start point and the list of curve sections
///
pub type SimpleBezierPath = (Coord2, Vec<(Coord2, Coord2, Coord2)>);

impl<Point: Coordinate> BezierPath for (Point, Vec<(Point, Point, Point)>) {
    type Point      = Point;
    type PointIter  = vec::IntoIter<(Point, Point, Point)>;

    #[inline]
    fn start_point(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn points(&self) -> Self::PointIter {
        self.1.clone().into_iter()
    }
}

impl<Point: Coordinate> BezierPathFactory for (Point, Vec<(Point, Point, Point)>) {
    fn from_points<FromIter: IntoIterator<Item=(Self::Point, Self::Point, Self::Point)>>(start_point: Self::Point, points: FromIter) -> Self {
        (start_point, points.into_iter().collect())
    }
}
