//! Darcy friction factor for turbulent flow in circular pipes.
//!
//! The Colebrook equation
//!
//! ```text
//! 1/√f = −2·log₁₀(ε/3.7 + 2.51/(Re·√f))
//! ```
//!
//! is implicit in `f`, with `ε = ks/D` the relative roughness. It is solved
//! with the [root finder](crate::support::root_finder) on a bracket covering
//! the friction factors found in practice, widened if necessary.

use thiserror::Error;

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    root_finder::{self, Bracket, Config},
};

/// Initial friction factor bracket.
///
/// Spans the fully rough and smooth-pipe limits of the Moody chart for
/// turbulent flow; the solver widens it for inputs outside that range.
const FRICTION_FACTOR_BRACKET: [f64; 2] = [0.008, 0.1];

/// Relative roughness at and above which the equation has no solution.
pub const MAX_RELATIVE_ROUGHNESS: f64 = 3.7;

/// Errors returned by [`friction_factor`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColebrookError {
    /// The Reynolds number is not strictly positive and finite.
    #[error("invalid Reynolds number: {0}")]
    Reynolds(ConstraintError),

    /// The relative roughness is negative, non-finite, or too large.
    #[error("invalid relative roughness: {0}")]
    RelativeRoughness(ConstraintError),

    /// The root finder failed.
    #[error(transparent)]
    Convergence(#[from] root_finder::Error),
}

/// Colebrook residual `1/√f + 2·log₁₀(ε/3.7 + 2.51/(Re·√f))`.
///
/// Strictly decreasing in `f`, and zero at the Darcy friction factor.
#[must_use]
pub fn residual(friction_factor: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let sqrt_f = friction_factor.sqrt();
    1.0 / sqrt_f + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * sqrt_f)).log10()
}

/// Solves the Colebrook equation for the Darcy friction factor.
///
/// Valid for turbulent flow (`Re > 4000`). A lower Reynolds number still
/// yields a nominal friction factor; callers are responsible for flagging
/// the regime.
///
/// # Errors
///
/// Returns a [`ColebrookError`] if `reynolds` is not strictly positive,
/// `relative_roughness` lies outside `[0, 3.7)`, either is non-finite, or
/// the root finder fails.
///
/// # Example
///
/// ```
/// use twine_hydraulics::support::{hydraulics::colebrook, root_finder::Config};
///
/// // Commercial steel, D = 0.3 m, ks = 0.045 mm.
/// let f = colebrook::friction_factor(2.0e5, 1.5e-4, &Config::default()).unwrap();
/// assert!((f - 0.0168).abs() < 1e-4);
/// ```
pub fn friction_factor(
    reynolds: f64,
    relative_roughness: f64,
    config: &Config,
) -> Result<f64, ColebrookError> {
    check_reynolds(reynolds).map_err(ColebrookError::Reynolds)?;
    check_relative_roughness(relative_roughness).map_err(ColebrookError::RelativeRoughness)?;

    let [lower, upper] = FRICTION_FACTOR_BRACKET;
    let solution = root_finder::solve(
        |f| residual(f, reynolds, relative_roughness),
        Bracket::expand_outward(lower, upper),
        config,
    )?;

    Ok(solution.x)
}

fn check_reynolds(reynolds: f64) -> Result<(), ConstraintError> {
    StrictlyPositive::new(reynolds)?;
    if reynolds.is_finite() {
        Ok(())
    } else {
        Err(ConstraintError::NotFinite)
    }
}

fn check_relative_roughness(relative_roughness: f64) -> Result<(), ConstraintError> {
    NonNegative::new(relative_roughness)?;
    if !relative_roughness.is_finite() {
        Err(ConstraintError::NotFinite)
    } else if relative_roughness >= MAX_RELATIVE_ROUGHNESS {
        Err(ConstraintError::AboveMaximum)
    } else {
        Ok(())
    }
}
