use thiserror::Error;

/// Errors returned by the root finder.
///
/// Every variant means no root was accepted; the solver never hands back a
/// partially converged value as a success.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The solver configuration is unusable.
    #[error("invalid root finder config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The bracket endpoints are non-finite or coincide.
    #[error("invalid bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },

    /// The residual evaluated to NaN or infinity.
    #[error("non-finite residual {residual} at x={x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// No sign change was found, even after expanding the bracket.
    #[error("no sign change in [{lower}, {upper}] after {expansions} expansion(s)")]
    NoSignChange {
        /// Final lower endpoint searched.
        lower: f64,
        /// Final upper endpoint searched.
        upper: f64,
        /// Number of expansions performed.
        expansions: usize,
    },

    /// The iteration budget ran out before the tolerances were met.
    #[error("root finder hit iteration limit: x={x}, residual={residual}")]
    MaxIters {
        /// Best estimate when the budget ran out.
        x: f64,
        /// Residual at the best estimate.
        residual: f64,
        /// Iterations performed.
        iters: usize,
    },
}
