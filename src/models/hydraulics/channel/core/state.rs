use uom::si::{
    f64::{Area, Length, Ratio, Velocity, VolumeRate},
    ratio::ratio,
};

use crate::support::{
    hydraulics::{
        geometry::ChannelGeometry,
        regime::{FroudeRegime, RegimeWarning},
    },
    units::{FlowUnits, KinematicViscosity},
};

use super::{ChannelUnknown, OptimalGeometry};

/// A fully resolved uniform open-channel flow.
///
/// Raw values are in the base units of `units`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFlowState {
    /// Volumetric flow rate `Q`.
    pub flow_rate: f64,

    /// Manning roughness coefficient `n`.
    pub roughness: f64,

    /// Friction slope `Sf`.
    pub slope: f64,

    /// Normal depth `y`.
    pub depth: f64,

    /// Resolved cross-section, including any solved width.
    pub geometry: ChannelGeometry,

    /// Flow area `A`.
    pub area: f64,

    /// Wetted perimeter `P`.
    pub wetted_perimeter: f64,

    /// Free-surface width `B`.
    pub top_width: f64,

    /// Hydraulic radius `R = A/P`.
    pub hydraulic_radius: f64,

    /// Hydraulic depth `D_h = A/B`.
    pub hydraulic_depth: f64,

    /// Mean velocity `V = Q/A`.
    pub velocity: f64,

    /// Specific energy `E = y + V²/(2g)`.
    pub specific_energy: f64,

    /// Froude number `Fr = V/√(g·D_h)`.
    pub froude_number: f64,

    /// Flow regime implied by `froude_number`.
    pub regime: FroudeRegime,

    /// Critical depth `yc` for this flow rate and section.
    pub critical_depth: f64,

    /// Kinematic viscosity used for `reynolds_number`.
    pub kinematic_viscosity: f64,

    /// Reynolds number `Re = V·R/ν`.
    pub reynolds_number: f64,

    /// Hydraulically optimal section, when a dimension was solved for in a
    /// rectangular or trapezoidal channel.
    pub optimal: Option<OptimalGeometry>,

    /// Unit system of the raw values.
    pub units: FlowUnits,

    /// The variable that was solved for.
    pub solved_for: ChannelUnknown,

    /// Non-fatal regime warnings.
    pub warnings: Vec<RegimeWarning>,
}

impl ChannelFlowState {
    /// Returns the state as dimensioned quantities.
    #[must_use]
    pub fn quantities(&self) -> ChannelQuantities {
        let units = self.units;
        ChannelQuantities {
            flow_rate: units.flow_rate(self.flow_rate),
            slope: Ratio::new::<ratio>(self.slope),
            depth: units.length(self.depth),
            area: units.area(self.area),
            wetted_perimeter: units.length(self.wetted_perimeter),
            top_width: units.length(self.top_width),
            hydraulic_radius: units.length(self.hydraulic_radius),
            hydraulic_depth: units.length(self.hydraulic_depth),
            velocity: units.velocity(self.velocity),
            specific_energy: units.length(self.specific_energy),
            froude_number: Ratio::new::<ratio>(self.froude_number),
            critical_depth: units.length(self.critical_depth),
            kinematic_viscosity: units.kinematic_viscosity(self.kinematic_viscosity),
            reynolds_number: Ratio::new::<ratio>(self.reynolds_number),
            optimal_depth: self.optimal.map(|opt| units.length(opt.depth)),
            optimal_bottom_width: self.optimal.map(|opt| units.length(opt.bottom_width)),
        }
    }
}

/// [`ChannelFlowState`] values as [`uom`] quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelQuantities {
    pub flow_rate: VolumeRate,
    pub slope: Ratio,
    pub depth: Length,
    pub area: Area,
    pub wetted_perimeter: Length,
    pub top_width: Length,
    pub hydraulic_radius: Length,
    pub hydraulic_depth: Length,
    pub velocity: Velocity,
    pub specific_energy: Length,
    pub froude_number: Ratio,
    pub critical_depth: Length,
    pub kinematic_viscosity: KinematicViscosity,
    pub reynolds_number: Ratio,
    pub optimal_depth: Option<Length>,
    pub optimal_bottom_width: Option<Length>,
}
