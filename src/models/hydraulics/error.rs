use thiserror::Error;

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive},
    hydraulics::colebrook::ColebrookError,
    root_finder::ConvergenceError,
    units::UnitsError,
};

/// Errors caused by the caller's input, detected before any root finding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Every candidate unknown was provided.
    #[error("nothing to solve for: leave exactly one of {candidates:?} unset")]
    NoUnknown {
        /// Fields that may be left unset.
        candidates: Vec<&'static str>,
    },

    /// More than one candidate unknown was left unset.
    #[error("too many unknowns: {fields:?} are unset, leave exactly one unset")]
    MultipleUnknowns {
        /// Fields that were left unset.
        fields: Vec<&'static str>,
    },

    /// A provided value violates its sign or range requirement.
    #[error("invalid {field}: {source}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// A circular section's flow depth is not below its diameter.
    #[error("depth {depth} must be below diameter {diameter}")]
    DepthNotBelowDiameter {
        /// Provided flow depth.
        depth: f64,

        /// Provided diameter.
        diameter: f64,
    },

    /// The unit system label was not recognised.
    #[error(transparent)]
    InvalidUnits(#[from] UnitsError),
}

impl InputError {
    pub(super) fn invalid(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidValue { field, source }
    }

    /// Returns the single unset candidate.
    ///
    /// Each slot is `(unknown, field name, is provided)`.
    pub(super) fn single_unknown<U: Copy>(slots: &[(U, &'static str, bool)]) -> Result<U, Self> {
        let mut missing = slots.iter().filter(|(_, _, provided)| !provided);

        match (missing.next(), missing.next()) {
            (Some(&(unknown, _, _)), None) => Ok(unknown),
            (None, _) => Err(Self::NoUnknown {
                candidates: slots.iter().map(|&(_, field, _)| field).collect(),
            }),
            (Some(_), Some(_)) => Err(Self::MultipleUnknowns {
                fields: slots
                    .iter()
                    .filter(|(_, _, provided)| !provided)
                    .map(|&(_, field, _)| field)
                    .collect(),
            }),
        }
    }
}

/// Checks that `value` is strictly positive and finite.
pub(super) fn positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    checked::<StrictlyPositive>(field, value)
}

/// Checks that `value` is non-negative and finite.
pub(super) fn non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    checked::<NonNegative>(field, value)
}

fn checked<C: Constraint<f64>>(field: &'static str, value: f64) -> Result<f64, InputError> {
    C::check(&value).map_err(InputError::invalid(field))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::InvalidValue {
            field,
            source: ConstraintError::NotFinite,
        })
    }
}

/// Errors that can occur while solving a flow model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The input was rejected.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Root finding failed.
    #[error("solver failed to converge: {0}")]
    Convergence(#[from] ConvergenceError),
}

impl From<UnitsError> for SolveError {
    fn from(err: UnitsError) -> Self {
        Self::Input(err.into())
    }
}

impl From<ColebrookError> for SolveError {
    fn from(err: ColebrookError) -> Self {
        match err {
            ColebrookError::Reynolds(source) => InputError::InvalidValue {
                field: "reynolds_number",
                source,
            }
            .into(),
            ColebrookError::RelativeRoughness(source) => InputError::InvalidValue {
                field: "roughness",
                source,
            }
            .into(),
            ColebrookError::Convergence(err) => Self::Convergence(err),
        }
    }
}
