//! Scalar root finding for implicit hydraulic relations.
//!
//! Every implicit relation in this crate (the Colebrook equation, inverse
//! Darcy–Weisbach, inverse Manning, critical depth) is posed as a residual
//! `g(x)` whose root is sought on a [`Bracket`]. The solver uses Brent's
//! method: inverse quadratic interpolation and secant steps where they make
//! good progress, bisection where they don't. This keeps the superlinear
//! rate of the open methods without losing the guaranteed convergence of
//! bisection, which matters near smooth-pipe friction factors and near-zero
//! depths where derivatives are poorly behaved.
//!
//! A bracket whose endpoints share a residual sign is widened according to
//! its [`Expansion`] policy until a sign change appears or the expansion
//! budget runs out.
//!
//! # Example
//!
//! ```
//! use twine_hydraulics::support::root_finder::{self, Bracket, Config};
//!
//! let solution = root_finder::solve(|x| x * x - 2.0, Bracket::fixed(0.0, 2.0), &Config::default())
//!     .unwrap();
//!
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-10);
//! ```

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::{Bracket, Expansion};
pub use config::Config;
pub use error::Error;
pub use solution::Solution;

/// Alias used by callers that surface root finder failures to users.
pub type ConvergenceError = Error;

/// Finds a root of an infallible residual.
///
/// # Errors
///
/// Returns an [`Error`] if the configuration or bracket is invalid, no sign
/// change can be bracketed, a residual is non-finite, or the iteration
/// budget is exhausted.
pub fn solve(
    mut residual: impl FnMut(f64) -> f64,
    bracket: Bracket,
    config: &Config,
) -> Result<Solution, Error> {
    try_solve(|x| Ok::<_, Error>(residual(x)), bracket, config)
}

/// Finds a root of an infallible residual starting from a positive guess.
///
/// # Errors
///
/// See [`solve`]. A non-positive or non-finite guess is an invalid bracket.
pub fn solve_from_guess(
    residual: impl FnMut(f64) -> f64,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(residual, guess_bracket(guess)?, config)
}

/// Finds a root of a residual that may itself fail.
///
/// Residual errors are returned unchanged; root finder errors are converted
/// into the caller's error type.
///
/// # Errors
///
/// Returns the residual's error, or a converted [`Error`] as described in
/// [`solve`].
pub fn try_solve<E>(
    mut residual: impl FnMut(f64) -> Result<f64, E>,
    bracket: Bracket,
    config: &Config,
) -> Result<Solution, E>
where
    E: From<Error>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut bracket = bracket.normalized()?;
    let [mut lower, mut upper] = bracket.as_array();
    let mut lower_residual = evaluate(&mut residual, lower)?;
    let mut upper_residual = evaluate(&mut residual, upper)?;
    let mut expansions = 0;

    loop {
        if lower_residual.abs() <= config.residual_tol {
            return Ok(converged(lower, lower_residual, 0, expansions));
        }
        if upper_residual.abs() <= config.residual_tol {
            return Ok(converged(upper, upper_residual, 0, expansions));
        }
        if lower_residual.signum() != upper_residual.signum() {
            break;
        }

        if expansions >= config.max_expansions || !bracket.widen(config.expansion_factor) {
            return Err(Error::NoSignChange {
                lower,
                upper,
                expansions,
            }
            .into());
        }
        expansions += 1;

        let [new_lower, new_upper] = bracket.as_array();
        tracing::debug!(
            lower = new_lower,
            upper = new_upper,
            expansions,
            "expanding bracket"
        );

        #[allow(clippy::float_cmp)]
        if new_lower != lower {
            lower = new_lower;
            lower_residual = evaluate(&mut residual, lower)?;
        }
        upper = new_upper;
        upper_residual = evaluate(&mut residual, upper)?;
    }

    brent(
        &mut residual,
        [lower, upper],
        [lower_residual, upper_residual],
        config,
        expansions,
    )
}

/// Finds a root of a fallible residual starting from a positive guess.
///
/// # Errors
///
/// See [`try_solve`]. A non-positive or non-finite guess is an invalid
/// bracket.
pub fn try_solve_from_guess<E>(
    residual: impl FnMut(f64) -> Result<f64, E>,
    guess: f64,
    config: &Config,
) -> Result<Solution, E>
where
    E: From<Error>,
{
    try_solve(residual, guess_bracket(guess)?, config)
}

fn guess_bracket(guess: f64) -> Result<Bracket, Error> {
    if guess.is_finite() && guess > 0.0 {
        Ok(Bracket::around(guess))
    } else {
        Err(Error::InvalidBracket {
            lower: guess,
            upper: guess,
        })
    }
}

/// Brent's method on a bracket known to contain a sign change.
fn brent<E>(
    residual: &mut impl FnMut(f64) -> Result<f64, E>,
    [mut a, mut b]: [f64; 2],
    [mut fa, mut fb]: [f64; 2],
    config: &Config,
    expansions: usize,
) -> Result<Solution, E>
where
    E: From<Error>,
{
    let mut c = b;
    let mut fc = fb;
    let mut step = b - a;
    let mut prev_step = step;

    for iter in 1..=config.max_iters {
        if (fb > 0.0) == (fc > 0.0) {
            c = a;
            fc = fa;
            step = b - a;
            prev_step = step;
        }

        // Keep `b` as the best estimate.
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = config.x_tol(b);
        let half_width = 0.5 * (c - b);

        if half_width.abs() <= tol || fb.abs() <= config.residual_tol {
            return Ok(converged(b, fb, iter - 1, expansions));
        }

        if prev_step.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            #[allow(clippy::float_cmp)]
            let (mut p, mut q) = if a == c {
                // Secant.
                (2.0 * half_width * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation.
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * half_width * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let limit = (3.0 * half_width * q - (tol * q).abs()).min((prev_step * q).abs());
            if 2.0 * p < limit {
                prev_step = step;
                step = p / q;
            } else {
                step = half_width;
                prev_step = step;
            }
        } else {
            step = half_width;
            prev_step = step;
        }

        a = b;
        fa = fb;
        b += if step.abs() > tol {
            step
        } else {
            tol.copysign(half_width)
        };
        fb = evaluate(residual, b)?;

        tracing::trace!(iter, x = b, residual = fb, "brent iteration");
    }

    Err(Error::MaxIters {
        x: b,
        residual: fb,
        iters: config.max_iters,
    }
    .into())
}

fn evaluate<E>(residual: &mut impl FnMut(f64) -> Result<f64, E>, x: f64) -> Result<f64, E>
where
    E: From<Error>,
{
    let value = residual(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResidual {
            x,
            residual: value,
        }
        .into())
    }
}

fn converged(x: f64, residual: f64, iters: usize, expansions: usize) -> Solution {
    tracing::debug!(x, residual, iters, expansions, "root finder converged");
    Solution {
        x,
        residual,
        iters,
        expansions,
    }
}
