//! Steady turbulent flow in a full circular pipe.
//!
//! Relates flow rate, diameter and friction head loss through the
//! Darcy–Weisbach equation with a Colebrook friction factor. Any one of the
//! three may be left unset and solved for.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_hydraulics::{
//!     models::hydraulics::pipe::{PipeFlow, PipeFlowInput, PipeUnknown},
//!     support::units::FlowUnits,
//! };
//!
//! // 100 m of commercial steel pipe carrying water at 20 °C.
//! let input = PipeFlowInput::new(100.0, 4.5e-5, 1.0e-6, FlowUnits::Si)
//!     .with_flow_rate(0.1)
//!     .with_diameter(0.3);
//!
//! let state = PipeFlow::default().call(&input).unwrap();
//!
//! assert_eq!(state.solved_for, PipeUnknown::HeadLoss);
//! assert!((state.head_loss - 0.517).abs() < 0.005);
//! assert!(state.warnings.is_empty());
//! ```

mod core;

pub use self::core::{PipeFlowInput, PipeFlowState, PipeQuantities, PipeUnknown};

use twine_core::Model;

use crate::{models::hydraulics::SolveError, support::root_finder::Config};

/// Darcy–Weisbach pipe flow model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipeFlow {
    config: Config,
}

impl PipeFlow {
    /// Creates a model with the default root finder settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with custom root finder settings.
    ///
    /// The same settings drive the Colebrook solve and the outer flow rate
    /// or diameter search.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the root finder settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Solves for the single unset variable of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Input`] if the input does not leave exactly one
    /// variable unset or holds an invalid value, and
    /// [`SolveError::Convergence`] if root finding fails.
    pub fn solve(&self, input: &PipeFlowInput) -> Result<PipeFlowState, SolveError> {
        self::core::solve(input, &self.config)
    }
}

impl Model for PipeFlow {
    type Input = PipeFlowInput;
    type Output = PipeFlowState;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
