///
/// The stage of the tridiagonal solver that produced a row of trace output
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverStage {
    /// The first row, before any elimination has happened
    Initial,

    /// An interior row after forward elimination
    ForwardElimination,

    /// The last row after elimination (before it's divided through by its pivot)
    LastRow,

    /// The last row after dividing by its pivot
    LastRowNormalized,

    /// A row after back-substitution
    BackSubstitution
}

///
/// The state of one row of the tridiagonal solver
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverRow {
    /// Which stage of the solver produced this row
    pub stage: SolverStage,

    /// The index of the row
    pub row: usize,

    /// The pivot for this row after elimination
    pub pivot: f64,

    /// The current value for the x axis
    pub x: f64,

    /// The current value for the y axis
    pub y: f64,

    /// The current value of the correction vector used when solving cyclic systems
    pub z: f64
}

///
/// Receives the state of each row as the tridiagonal solver works through it
///
pub trait SolverTrace {
    ///
    /// Called after the solver has updated a row
    ///
    fn trace_row(&mut self, row: &SolverRow);
}

///
/// Solver trace that discards everything it's sent
///
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl SolverTrace for NoTrace {
    #[inline]
    fn trace_row(&mut self, _row: &SolverRow) { }
}

impl<TraceFn: FnMut(&SolverRow)> SolverTrace for TraceFn {
    #[inline]
    fn trace_row(&mut self, row: &SolverRow) {
        (self)(row)
    }
}
