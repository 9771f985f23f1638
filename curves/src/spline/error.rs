use std::fmt;
use std::error::Error;

///
/// Errors that can occur while generating a spline
///
#[derive(Clone, Debug, PartialEq)]
pub enum SplineError {
    /// A spline needs at least two knots (the number of knots that were supplied is included)
    TooFewKnots(usize),

    /// The tridiagonal solver needs at least two rows (the number of rows that were supplied is included)
    TooFewRows(usize),

    /// The x and y coefficient vectors passed to the solver were of different lengths
    MismatchedCoefficients { x_len: usize, y_len: usize }
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SplineError::TooFewKnots(count)                         => write!(f, "a spline needs at least 2 knots, but {} were supplied", count),
            SplineError::TooFewRows(count)                          => write!(f, "the spline solver needs at least 2 rows, but {} were supplied", count),
            SplineError::MismatchedCoefficients { x_len, y_len }    => write!(f, "coefficient vectors have different lengths (x: {}, y: {})", x_len, y_len)
        }
    }
}

impl Error for SplineError { }
