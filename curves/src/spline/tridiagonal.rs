use super::trace::*;
use super::error::*;

/// Every row of a spline system has 1 as its superdiagonal coefficient
const SUPERDIAGONAL: f64 = 1.0;

///
/// Returns the diagonal coefficient (b) for a row of a spline system with `len` rows
///
/// For open curves the first and last rows encode the zero-curvature end conditions. For cyclic curves, the
/// first and last rows have the rank-1 correction term (u = v = (1, 0, ..., 0, 1)) subtracted so that the
/// remaining system is an ordinary tridiagonal one.
///
#[inline]
pub fn row_diagonal(row: usize, len: usize, cyclic: bool) -> f64 {
    match (row, cyclic) {
        (0, true)                       => 3.0,
        (0, false)                      => 2.0,
        (r, true) if r+1 == len         => 3.0,
        (r, false) if r+1 == len        => 7.0,
        _                               => 4.0
    }
}

///
/// Returns the subdiagonal coefficient (a) for a row of a spline system with `len` rows
///
/// The first row has no subdiagonal entry, so this is 0 for row 0.
///
#[inline]
pub fn row_subdiagonal(row: usize, len: usize, cyclic: bool) -> f64 {
    if row == 0 {
        0.0
    } else if row+1 == len && !cyclic {
        2.0
    } else {
        1.0
    }
}

///
/// Solves the spline system for two right-hand sides (one per axis) using the Thomas algorithm, returning the
/// solution for each axis
///
/// The coefficients of the system are not passed in: they're fixed by the position of each row and whether or
/// not the system is cyclic (see `row_diagonal` and `row_subdiagonal`). A cyclic system is solved as a
/// tridiagonal system and then corrected with `apply_cyclic_correction`.
///
/// The pivots depend only on the row positions and are never zero. Infinite or NaN coefficients produce
/// infinite or NaN values in the solution.
///
#[inline]
pub fn solve_tridiagonal(rx: &[f64], ry: &[f64], cyclic: bool) -> Result<(Vec<f64>, Vec<f64>), SplineError> {
    solve_tridiagonal_with_trace(rx, ry, cyclic, &mut NoTrace)
}

///
/// As for `solve_tridiagonal`, but reports the state of every row to a trace as the solver works through it
///
pub fn solve_tridiagonal_with_trace<Trace: SolverTrace>(rx: &[f64], ry: &[f64], cyclic: bool, trace: &mut Trace) -> Result<(Vec<f64>, Vec<f64>), SplineError> {
    let n = rx.len();

    if n != ry.len() {
        return Err(SplineError::MismatchedCoefficients { x_len: n, y_len: ry.len() });
    }
    if n < 2 {
        return Err(SplineError::TooFewRows(n));
    }

    let mut x   = vec![0.0; n];
    let mut y   = vec![0.0; n];
    let mut z   = vec![0.0; n];
    let mut bb  = vec![0.0; n];

    // z is the solution for the correction vector u, which is 1 on the first and last rows and 0 elsewhere
    bb[0]   = row_diagonal(0, n, cyclic);
    x[0]    = rx[0];
    y[0]    = ry[0];
    z[0]    = 1.0;
    trace.trace_row(&SolverRow { stage: SolverStage::Initial, row: 0, pivot: bb[0], x: x[0], y: y[0], z: z[0] });

    // Forward elimination
    for i in 1..n {
        let a   = row_subdiagonal(i, n, cyclic);
        let b   = row_diagonal(i, n, cyclic);
        let u   = if i == n-1 { 1.0 } else { 0.0 };

        bb[i]   = b - a*SUPERDIAGONAL/bb[i-1];
        x[i]    = rx[i] - a*x[i-1]/bb[i-1];
        y[i]    = ry[i] - a*y[i-1]/bb[i-1];
        z[i]    = u - a*z[i-1]/bb[i-1];

        let stage = if i == n-1 { SolverStage::LastRow } else { SolverStage::ForwardElimination };
        trace.trace_row(&SolverRow { stage: stage, row: i, pivot: bb[i], x: x[i], y: y[i], z: z[i] });
    }

    // The last row has no superdiagonal, so it can be solved directly
    let last    = n-1;
    x[last]     = x[last]/bb[last];
    y[last]     = y[last]/bb[last];
    z[last]     = z[last]/bb[last];
    trace.trace_row(&SolverRow { stage: SolverStage::LastRowNormalized, row: last, pivot: bb[last], x: x[last], y: y[last], z: z[last] });

    // Back substitution
    for i in (0..last).rev() {
        x[i]    = (x[i] - SUPERDIAGONAL*x[i+1])/bb[i];
        y[i]    = (y[i] - SUPERDIAGONAL*y[i+1])/bb[i];
        z[i]    = (z[i] - SUPERDIAGONAL*z[i+1])/bb[i];

        trace.trace_row(&SolverRow { stage: SolverStage::BackSubstitution, row: i, pivot: bb[i], x: x[i], y: y[i], z: z[i] });
    }

    if cyclic {
        apply_cyclic_correction(&mut x, &mut y, &z);
    }

    Ok((x, y))
}

///
/// Converts the solution of the truncated tridiagonal system into the solution of the cyclic system
///
/// This is the Sherman-Morrison formula: the cyclic matrix A is written as B + u·vᵀ where B is tridiagonal and
/// u = v = (1, 0, ..., 0, 1). `x` and `y` are the solutions of B for each axis and `z` is the solution of B·z = u.
/// The solution of A is then x - z·(v·x)/(1 + v·z).
///
pub fn apply_cyclic_correction(x: &mut [f64], y: &mut [f64], z: &[f64]) {
    let last    = z.len()-1;

    let d       = 1.0 + z[0] + z[last];
    let fx      = (x[0] + x[last])/d;
    let fy      = (y[0] + y[last])/d;

    for i in 0..z.len() {
        x[i] -= fx*z[i];
        y[i] -= fy*z[i];
    }
}
