use crate::{
    models::hydraulics::{
        InputError,
        error::{non_negative, positive},
    },
    support::{
        constraint::ConstraintError, hydraulics::geometry::ChannelGeometry, units::FlowUnits,
    },
};

/// Variables describing uniform flow in a prismatic open channel.
///
/// Exactly one of `flow_rate`, `slope`, `depth` and (for rectangular and
/// trapezoidal sections) the section width must be `None`; that variable is
/// the one solved for. All values are raw numbers in the base units of
/// `units`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFlowInput {
    /// Volumetric flow rate `Q`.
    pub flow_rate: Option<f64>,

    /// Manning roughness coefficient `n`.
    pub roughness: f64,

    /// Channel bed (friction) slope `Sf`.
    pub slope: Option<f64>,

    /// Normal flow depth `y`.
    pub depth: Option<f64>,

    /// Cross-section shape.
    pub section: ChannelSection,

    /// Kinematic viscosity `ν` used for the channel Reynolds number.
    ///
    /// Defaults to water at 20 °C.
    pub kinematic_viscosity: Option<f64>,

    /// Unit system of every value above.
    pub units: FlowUnits,
}

impl ChannelFlowInput {
    /// Creates an input for `section` with roughness `n` and every
    /// candidate unknown outside the section unset.
    #[must_use]
    pub fn new(section: ChannelSection, roughness: f64, units: FlowUnits) -> Self {
        Self {
            flow_rate: None,
            roughness,
            slope: None,
            depth: None,
            section,
            kinematic_viscosity: None,
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

    /// Sets the slope.
    #[must_use]
    pub fn with_slope(self, slope: f64) -> Self {
        Self {
            slope: Some(slope),
            ..self
        }
    }

    /// Sets the depth.
    #[must_use]
    pub fn with_depth(self, depth: f64) -> Self {
        Self {
            depth: Some(depth),
            ..self
        }
    }

    /// Sets the kinematic viscosity.
    #[must_use]
    pub fn with_kinematic_viscosity(self, kinematic_viscosity: f64) -> Self {
        Self {
            kinematic_viscosity: Some(kinematic_viscosity),
            ..self
        }
    }

    /// Returns the unset variable.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] unless exactly one candidate is unset.
    pub fn unknown(&self) -> Result<ChannelUnknown, InputError> {
        let mut slots = vec![
            (ChannelUnknown::FlowRate, "flow_rate", self.flow_rate.is_some()),
            (ChannelUnknown::Slope, "slope", self.slope.is_some()),
            (ChannelUnknown::Depth, "depth", self.depth.is_some()),
        ];
        match self.section {
            ChannelSection::Rectangular { width } => {
                slots.push((ChannelUnknown::BottomWidth, "width", width.is_some()));
            }
            ChannelSection::Trapezoidal { bottom_width, .. } => {
                let provided = bottom_width.is_some();
                slots.push((ChannelUnknown::BottomWidth, "bottom_width", provided));
            }
            ChannelSection::Triangular { .. } | ChannelSection::Circular { .. } => {}
        }
        InputError::single_unknown(&slots)
    }

    /// Identifies the unknown and checks every provided value.
    pub(super) fn validate(&self) -> Result<(ChannelProblem, ChannelProperties), InputError> {
        self.unknown()?;

        let properties = ChannelProperties {
            roughness: positive("roughness", self.roughness)?,
            kinematic_viscosity: self
                .kinematic_viscosity
                .map(|nu| positive("kinematic_viscosity", nu))
                .transpose()?,
            units: self.units,
        };

        let flow_rate = self.flow_rate.map(|q| positive("flow_rate", q)).transpose()?;
        let slope = self.slope.map(|s| positive("slope", s)).transpose()?;
        let depth = self.depth.map(|y| positive("depth", y)).transpose()?;
        let section = self.section.validate()?;

        if let (Some(depth), SectionShape::Known(geometry)) = (depth, section) {
            if let Some(diameter) = geometry.max_depth().filter(|&d| depth >= d) {
                return Err(InputError::DepthNotBelowDiameter { depth, diameter });
            }
        }

        let problem = match (flow_rate, slope, depth, section) {
            (None, Some(slope), Some(depth), SectionShape::Known(geometry)) => {
                ChannelProblem::FlowRate {
                    geometry,
                    slope,
                    depth,
                }
            }
            (Some(flow_rate), None, Some(depth), SectionShape::Known(geometry)) => {
                ChannelProblem::Slope {
                    geometry,
                    flow_rate,
                    depth,
                }
            }
            (Some(flow_rate), Some(slope), None, SectionShape::Known(geometry)) => {
                ChannelProblem::Depth {
                    geometry,
                    flow_rate,
                    slope,
                }
            }
            (Some(flow_rate), Some(slope), Some(depth), SectionShape::OpenWidth(section)) => {
                ChannelProblem::Width {
                    section,
                    flow_rate,
                    slope,
                    depth,
                }
            }
            _ => unreachable!("unknown() guarantees exactly one unset field"),
        };

        Ok((problem, properties))
    }
}

/// Channel cross-section as supplied by the caller.
///
/// Dimensions are raw lengths in the input's unit system; side slopes are
/// horizontal run per unit rise. Rectangular and trapezoidal widths may be
/// left `None` to solve for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelSection {
    Rectangular { width: Option<f64> },
    Triangular { side_slope: f64 },
    Trapezoidal { bottom_width: Option<f64>, side_slope: f64 },
    Circular { diameter: f64 },
}

impl ChannelSection {
    fn validate(self) -> Result<SectionShape, InputError> {
        let shape = match self {
            Self::Rectangular { width: None } => {
                SectionShape::OpenWidth(WidthSection::Rectangular)
            }
            Self::Rectangular { width: Some(width) } => {
                SectionShape::Known(ChannelGeometry::Rectangular {
                    width: positive("width", width)?,
                })
            }
            Self::Triangular { side_slope } => SectionShape::Known(ChannelGeometry::Triangular {
                side_slope: positive("side_slope", side_slope)?,
            }),
            Self::Trapezoidal {
                bottom_width,
                side_slope,
            } => {
                let side_slope = non_negative("side_slope", side_slope)?;
                match bottom_width {
                    None => SectionShape::OpenWidth(WidthSection::Trapezoidal { side_slope }),
                    Some(bottom_width) => {
                        let bottom_width = non_negative("bottom_width", bottom_width)?;
                        #[allow(clippy::float_cmp)]
                        if bottom_width == 0.0 && side_slope == 0.0 {
                            return Err(InputError::InvalidValue {
                                field: "side_slope",
                                source: ConstraintError::Zero,
                            });
                        }
                        SectionShape::Known(ChannelGeometry::Trapezoidal {
                            bottom_width,
                            side_slope,
                        })
                    }
                }
            }
            Self::Circular { diameter } => SectionShape::Known(ChannelGeometry::Circular {
                diameter: positive("diameter", diameter)?,
            }),
        };
        Ok(shape)
    }
}

/// The variable a [`ChannelFlowInput`] leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelUnknown {
    FlowRate,
    Slope,
    Depth,
    /// Width of a rectangular section or bottom width of a trapezoidal one.
    BottomWidth,
}

/// A validated solve request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ChannelProblem {
    FlowRate {
        geometry: ChannelGeometry,
        slope: f64,
        depth: f64,
    },
    Slope {
        geometry: ChannelGeometry,
        flow_rate: f64,
        depth: f64,
    },
    Depth {
        geometry: ChannelGeometry,
        flow_rate: f64,
        slope: f64,
    },
    Width {
        section: WidthSection,
        flow_rate: f64,
        slope: f64,
        depth: f64,
    },
}

/// Validated properties shared by every solve mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ChannelProperties {
    pub(super) roughness: f64,
    pub(super) kinematic_viscosity: Option<f64>,
    pub(super) units: FlowUnits,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SectionShape {
    Known(ChannelGeometry),
    OpenWidth(WidthSection),
}

/// A rectangular or trapezoidal section whose width is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum WidthSection {
    Rectangular,
    Trapezoidal { side_slope: f64 },
}

impl WidthSection {
    pub(super) fn side_slope(self) -> f64 {
        match self {
            Self::Rectangular => 0.0,
            Self::Trapezoidal { side_slope } => side_slope,
        }
    }

    /// The section with its width fixed at `width`.
    pub(super) fn with_width(self, width: f64) -> ChannelGeometry {
        match self {
            Self::Rectangular => ChannelGeometry::Rectangular { width },
            Self::Trapezoidal { side_slope } => ChannelGeometry::Trapezoidal {
                bottom_width: width,
                side_slope,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trapezoid() -> ChannelSection {
        ChannelSection::Trapezoidal {
            bottom_width: Some(20.0),
            side_slope: 1.0,
        }
    }

    #[test]
    fn identifies_unknown() {
        let input = ChannelFlowInput::new(trapezoid(), 0.015, FlowUnits::Eng)
            .with_flow_rate(360.0)
            .with_depth(3.0);
        assert_eq!(input.unknown(), Ok(ChannelUnknown::Slope));

        let input = ChannelFlowInput::new(
            ChannelSection::Rectangular { width: None },
            0.015,
            FlowUnits::Eng,
        )
        .with_flow_rate(360.0)
        .with_depth(3.0)
        .with_slope(0.001);
        assert_eq!(input.unknown(), Ok(ChannelUnknown::BottomWidth));
    }

    #[test]
    fn requires_exactly_one_unknown() {
        let none = ChannelFlowInput::new(trapezoid(), 0.015, FlowUnits::Eng)
            .with_flow_rate(360.0)
            .with_depth(3.0)
            .with_slope(0.001);
        assert_eq!(
            none.unknown(),
            Err(InputError::NoUnknown {
                candidates: vec!["flow_rate", "slope", "depth", "bottom_width"]
            })
        );

        let two = ChannelFlowInput::new(
            ChannelSection::Circular { diameter: 2.0 },
            0.013,
            FlowUnits::Si,
        )
        .with_flow_rate(1.0);
        assert_eq!(
            two.unknown(),
            Err(InputError::MultipleUnknowns {
                fields: vec!["slope", "depth"]
            })
        );
    }

    #[test]
    fn circular_depth_must_be_below_diameter() {
        let input = ChannelFlowInput::new(
            ChannelSection::Circular { diameter: 2.0 },
            0.013,
            FlowUnits::Si,
        )
        .with_slope(0.001)
        .with_depth(2.0);

        assert_eq!(
            input.validate(),
            Err(InputError::DepthNotBelowDiameter {
                depth: 2.0,
                diameter: 2.0
            })
        );
    }

    #[test]
    fn rejects_invalid_sections() {
        let flat = ChannelSection::Trapezoidal {
            bottom_width: Some(0.0),
            side_slope: 0.0,
        };
        let input = ChannelFlowInput::new(flat, 0.015, FlowUnits::Si)
            .with_slope(0.001)
            .with_depth(1.0);
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidValue {
                field: "side_slope",
                source: ConstraintError::Zero
            })
        );

        let vee = ChannelSection::Triangular { side_slope: -1.0 };
        let input = ChannelFlowInput::new(vee, 0.015, FlowUnits::Si)
            .with_slope(0.001)
            .with_depth(1.0);
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidValue {
                field: "side_slope",
                source: ConstraintError::Negative
            })
        );
    }

    #[test]
    fn rejects_non_positive_roughness() {
        let input = ChannelFlowInput::new(trapezoid(), 0.0, FlowUnits::Eng)
            .with_flow_rate(360.0)
            .with_depth(3.0);
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidValue {
                field: "roughness",
                source: ConstraintError::Zero
            })
        );
    }

    #[test]
    fn trapezoid_with_zero_bottom_is_triangular() {
        let section = ChannelSection::Trapezoidal {
            bottom_width: Some(0.0),
            side_slope: 2.0,
        };
        let input = ChannelFlowInput::new(section, 0.015, FlowUnits::Si)
            .with_slope(0.001)
            .with_depth(1.0);
        let (problem, _) = input.validate().expect("valid section");

        assert!(matches!(
            problem,
            ChannelProblem::FlowRate {
                geometry: ChannelGeometry::Trapezoidal { .. },
                ..
            }
        ));
    }
}
