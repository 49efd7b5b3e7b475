/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Location of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Brent iterations performed after bracketing.
    pub iters: usize,

    /// Bracket expansions performed before a sign change was found.
    pub expansions: usize,
}
