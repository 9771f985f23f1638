use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a bezier curve
///
pub trait Coordinate : Sized+Copy+PartialEq+Add<Self, Output=Self>+Mul<f64, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f64 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f64::sqrt(squared_distance)
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        let mut dot_product = 0.0;

        for component_index in 0..Self::len() {
            dot_product += self.get(component_index) * target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// True if every component of this coordinate is a finite number (ie, not NaN or infinite)
    ///
    #[inline]
    fn is_finite(&self) -> bool {
        for component in 0..Self::len() {
            if !self.get(component).is_finite() {
                return false;
            }
        }

        true
    }
}

///
/// Implemented by geometry (such as curves) to name the type of coordinate it's built from
///
pub trait Geo {
    /// The type of a point in this geometry
    type Point: Coordinate;
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for f64 {
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline] fn origin() -> f64 { 0.0 }
    #[inline] fn len() -> usize { 1 }
    #[inline] fn get(&self, _index: usize) -> f64 { *self }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        f64::abs(self-target)
    }

    fn dot(&self, target: &f64) -> f64 {
        self * target
    }
}

/// Represents a 2D point
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Coord2(pub f64, pub f64);

impl Coordinate2D for Coord2 {
    ///
    /// X component of this coordinate
    ///
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize { 2 }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        match index {
            0 => self.0,
            1 => self.1,
            _ => panic!("Coord2 only has two components")
        }
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        self.0*target.0 + self.1*target.1
    }
}
