//! Uniform flow in prismatic open channels.
//!
//! Relates flow rate, slope, normal depth and section width through
//! Manning's equation for rectangular, triangular, trapezoidal and partially
//! full circular sections. Any one of those variables may be left unset and
//! solved for. Each solve also reports the critical depth and Froude regime,
//! and, when a section dimension was solved for, the hydraulically optimal
//! section for the same flow.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_hydraulics::{
//!     models::hydraulics::channel::{ChannelFlow, ChannelFlowInput, ChannelSection},
//!     support::{hydraulics::regime::FroudeRegime, units::FlowUnits},
//! };
//!
//! let section = ChannelSection::Trapezoidal {
//!     bottom_width: Some(20.0),
//!     side_slope: 1.0,
//! };
//! let input = ChannelFlowInput::new(section, 0.015, FlowUnits::Eng)
//!     .with_flow_rate(360.0)
//!     .with_depth(3.0);
//!
//! let state = ChannelFlow::default().call(&input).unwrap();
//!
//! assert!((state.slope - 8.48e-4).abs() < 1e-6);
//! assert!(state.critical_depth < state.depth);
//! assert_eq!(state.regime, FroudeRegime::Subcritical);
//! ```

mod core;

pub use self::core::{
    ChannelFlowInput, ChannelFlowState, ChannelQuantities, ChannelSection, ChannelUnknown,
    OptimalGeometry,
};

use twine_core::Model;

use crate::{
    models::hydraulics::SolveError,
    support::{hydraulics::regime::CRITICAL_FROUDE_BAND, root_finder::Config},
};

/// Manning open-channel flow model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFlow {
    config: Config,
    critical_band: f64,
}

impl Default for ChannelFlow {
    fn default() -> Self {
        Self {
            config: Config::default(),
            critical_band: CRITICAL_FROUDE_BAND,
        }
    }
}

impl ChannelFlow {
    /// Creates a model with the default root finder settings and critical
    /// Froude band.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with custom root finder settings.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Sets the half-width of the band around `Fr = 1` reported as critical.
    #[must_use]
    pub fn with_critical_band(self, critical_band: f64) -> Self {
        Self {
            critical_band,
            ..self
        }
    }

    /// Returns the root finder settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the half-width of the critical Froude band.
    #[must_use]
    pub fn critical_band(&self) -> f64 {
        self.critical_band
    }

    /// Solves for the single unset variable of `input`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Input`] if the input does not leave exactly one
    /// variable unset or holds an invalid value, and
    /// [`SolveError::Convergence`] if root finding fails, including a
    /// circular section asked to carry more than its capacity.
    pub fn solve(&self, input: &ChannelFlowInput) -> Result<ChannelFlowState, SolveError> {
        self::core::solve(input, &self.config, self.critical_band)
    }
}

impl Model for ChannelFlow {
    type Input = ChannelFlowInput;
    type Output = ChannelFlowState;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}
