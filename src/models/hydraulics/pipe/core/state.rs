use uom::si::{
    f64::{Length, Ratio, Velocity, VolumeRate},
    ratio::ratio,
};

use crate::support::{
    hydraulics::regime::RegimeWarning,
    units::{FlowUnits, KinematicViscosity},
};

use super::PipeUnknown;

/// A fully resolved full-pipe flow.
///
/// Raw values are in the base units of `units`.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeFlowState {
    /// Volumetric flow rate `Q`.
    pub flow_rate: f64,

    /// Inside diameter `D`.
    pub diameter: f64,

    /// Pipe length `L`.
    pub length: f64,

    /// Equivalent sand-grain roughness `ks`.
    pub roughness: f64,

    /// Kinematic viscosity `ν`.
    pub kinematic_viscosity: f64,

    /// Friction head loss `hf`.
    pub head_loss: f64,

    /// Darcy friction factor `f`.
    pub friction_factor: f64,

    /// Reynolds number `Re = V·D/ν`.
    pub reynolds_number: f64,

    /// Mean velocity `V = 4Q/(πD²)`.
    pub velocity: f64,

    /// Unit system of the raw values.
    pub units: FlowUnits,

    /// The variable that was solved for.
    pub solved_for: PipeUnknown,

    /// Non-fatal regime warnings.
    pub warnings: Vec<RegimeWarning>,
}

impl PipeFlowState {
    /// Relative roughness `ks/D`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        self.roughness / self.diameter
    }

    /// Returns `true` if no regime warning was raised.
    #[must_use]
    pub fn is_turbulent(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the state as dimensioned quantities.
    #[must_use]
    pub fn quantities(&self) -> PipeQuantities {
        let units = self.units;
        PipeQuantities {
            flow_rate: units.flow_rate(self.flow_rate),
            diameter: units.length(self.diameter),
            length: units.length(self.length),
            roughness: units.length(self.roughness),
            kinematic_viscosity: units.kinematic_viscosity(self.kinematic_viscosity),
            head_loss: units.length(self.head_loss),
            friction_factor: Ratio::new::<ratio>(self.friction_factor),
            reynolds_number: Ratio::new::<ratio>(self.reynolds_number),
            velocity: units.velocity(self.velocity),
        }
    }
}

/// [`PipeFlowState`] values as [`uom`] quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeQuantities {
    pub flow_rate: VolumeRate,
    pub diameter: Length,
    pub length: Length,
    pub roughness: Length,
    pub kinematic_viscosity: KinematicViscosity,
    pub head_loss: Length,
    pub friction_factor: Ratio,
    pub reynolds_number: Ratio,
    pub velocity: Velocity,
}
