/// Configuration for the root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of Brent iterations once a sign change is bracketed.
    pub max_iters: usize,

    /// Absolute tolerance on the search variable.
    pub x_abs_tol: f64,

    /// Relative tolerance on the search variable.
    pub x_rel_tol: f64,

    /// Absolute tolerance on the residual.
    pub residual_tol: f64,

    /// Maximum number of times an expandable bracket is widened while
    /// looking for a sign change.
    pub max_expansions: usize,

    /// Factor applied to the bracket on each expansion.
    pub expansion_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-14,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
            max_expansions: 60,
            expansion_factor: 2.0,
        }
    }
}

impl Config {
    /// Checks that the tolerances and expansion settings are usable.
    ///
    /// # Errors
    ///
    /// Returns a static description of the first invalid setting.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.x_abs_tol.is_finite() && self.x_abs_tol >= 0.0) {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !(self.x_rel_tol.is_finite() && self.x_rel_tol >= 0.0) {
            return Err("x_rel_tol must be finite and non-negative");
        }
        if !(self.residual_tol.is_finite() && self.residual_tol >= 0.0) {
            return Err("residual_tol must be finite and non-negative");
        }
        if !(self.expansion_factor.is_finite() && self.expansion_factor > 1.0) {
            return Err("expansion_factor must be finite and greater than one");
        }
        Ok(())
    }

    /// Half-width below which the bracket around `x` counts as converged.
    pub(super) fn x_tol(&self, x: f64) -> f64 {
        2.0 * f64::EPSILON * x.abs() + 0.5 * (self.x_abs_tol + self.x_rel_tol * x.abs())
    }
}
