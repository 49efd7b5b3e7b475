use crate::{
    models::hydraulics::{
        InputError,
        error::{non_negative, positive},
    },
    support::units::FlowUnits,
};

/// Variables describing steady full-pipe flow.
///
/// Exactly one of `flow_rate`, `diameter` and `head_loss` must be `None`;
/// that variable is the one solved for. All values are raw numbers in the
/// base units of `units`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeFlowInput {
    /// Volumetric flow rate `Q`.
    pub flow_rate: Option<f64>,

    /// Inside diameter `D`.
    pub diameter: Option<f64>,

    /// Friction head loss `hf` over `length`.
    pub head_loss: Option<f64>,

    /// Pipe length `L`.
    pub length: f64,

    /// Equivalent sand-grain roughness `ks`. Zero for a smooth pipe.
    pub roughness: f64,

    /// Kinematic viscosity `ν` of the fluid.
    pub kinematic_viscosity: f64,

    /// Unit system of every value above.
    pub units: FlowUnits,
}

impl PipeFlowInput {
    /// Creates an input with the pipe and fluid fixed and every candidate
    /// unknown unset.
    #[must_use]
    pub fn new(length: f64, roughness: f64, kinematic_viscosity: f64, units: FlowUnits) -> Self {
        Self {
            flow_rate: None,
            diameter: None,
            head_loss: None,
            length,
            roughness,
            kinematic_viscosity,
            units,
        }
    }

    /// Sets the flow rate.
    #[must_use]
    pub fn with_flow_rate(self, flow_rate: f64) -> Self {
        Self {
            flow_rate: Some(flow_rate),
            ..self
        }
    }

    /// Sets the diameter.
    #[must_use]
    pub fn with_diameter(self, diameter: f64) -> Self {
        Self {
            diameter: Some(diameter),
            ..self
        }
    }

    /// Sets the friction head loss.
    #[must_use]
    pub fn with_head_loss(self, head_loss: f64) -> Self {
        Self {
            head_loss: Some(head_loss),
            ..self
        }
    }

    /// Returns the unset variable.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] unless exactly one candidate is unset.
    pub fn unknown(&self) -> Result<PipeUnknown, InputError> {
        InputError::single_unknown(&[
            (PipeUnknown::FlowRate, "flow_rate", self.flow_rate.is_some()),
            (PipeUnknown::Diameter, "diameter", self.diameter.is_some()),
            (PipeUnknown::HeadLoss, "head_loss", self.head_loss.is_some()),
        ])
    }

    /// Identifies the unknown and checks every provided value.
    pub(super) fn validate(&self) -> Result<(PipeProblem, PipeProperties), InputError> {
        let unknown = self.unknown()?;

        let properties = PipeProperties {
            length: positive("length", self.length)?,
            roughness: non_negative("roughness", self.roughness)?,
            kinematic_viscosity: positive("kinematic_viscosity", self.kinematic_viscosity)?,
            units: self.units,
        };

        let flow_rate = self.flow_rate.map(|q| positive("flow_rate", q)).transpose()?;
        let diameter = self.diameter.map(|d| positive("diameter", d)).transpose()?;
        let head_loss = self.head_loss.map(|hf| positive("head_loss", hf)).transpose()?;

        let problem = match (unknown, flow_rate, diameter, head_loss) {
            (PipeUnknown::HeadLoss, Some(flow_rate), Some(diameter), None) => {
                PipeProblem::HeadLoss {
                    flow_rate,
                    diameter,
                }
            }
            (PipeUnknown::FlowRate, None, Some(diameter), Some(head_loss)) => {
                PipeProblem::FlowRate {
                    diameter,
                    head_loss,
                }
            }
            (PipeUnknown::Diameter, Some(flow_rate), None, Some(head_loss)) => {
                PipeProblem::Diameter {
                    flow_rate,
                    head_loss,
                }
            }
            _ => unreachable!("unknown() guarantees exactly one unset field"),
        };

        Ok((problem, properties))
    }
}

/// The variable a [`PipeFlowInput`] leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeUnknown {
    FlowRate,
    Diameter,
    HeadLoss,
}

/// A validated solve request, carrying the two known candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum PipeProblem {
    HeadLoss { flow_rate: f64, diameter: f64 },
    FlowRate { diameter: f64, head_loss: f64 },
    Diameter { flow_rate: f64, head_loss: f64 },
}

/// Validated pipe and fluid properties shared by every solve mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PipeProperties {
    pub(super) length: f64,
    pub(super) roughness: f64,
    pub(super) kinematic_viscosity: f64,
    pub(super) units: FlowUnits,
}
