//! Uniform open-channel flow solver.
//!
//! Flow rate and slope follow from Manning's equation in closed form. Depth
//! and width are found by root finding on the Manning flow rate. Whatever
//! was solved for, the completed section is then characterised by its
//! critical depth, Froude and Reynolds numbers, and specific energy.

mod input;
mod manning;
mod optimal;
mod state;

pub use input::{ChannelFlowInput, ChannelSection, ChannelUnknown};
pub use optimal::OptimalGeometry;
pub use state::{ChannelFlowState, ChannelQuantities};

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::{
    models::hydraulics::{InputError, SolveError},
    support::{
        hydraulics::{
            critical_depth,
            geometry::ChannelGeometry,
            regime::{self, FroudeRegime},
        },
        root_finder::Config,
        water,
    },
};

use input::{ChannelProblem, ChannelProperties};

/// Water temperature assumed when no viscosity is given.
const DEFAULT_WATER_CELSIUS: f64 = 20.0;

/// Solves a channel flow problem for its single unknown.
pub(super) fn solve(
    input: &ChannelFlowInput,
    config: &Config,
    critical_band: f64,
) -> Result<ChannelFlowState, SolveError> {
    let (problem, properties) = input.validate()?;
    let units = properties.units;

    let (geometry, flow_rate, slope, depth, solved_for, optimal_side_slope) = match problem {
        ChannelProblem::FlowRate {
            geometry,
            slope,
            depth,
        } => {
            let flow_rate = manning::flow_rate(&properties, &geometry, depth, slope);
            (geometry, flow_rate, slope, depth, ChannelUnknown::FlowRate, None)
        }
        ChannelProblem::Slope {
            geometry,
            flow_rate,
            depth,
        } => {
            let slope = manning::slope(&properties, &geometry, depth, flow_rate);
            (geometry, flow_rate, slope, depth, ChannelUnknown::Slope, None)
        }
        ChannelProblem::Depth {
            geometry,
            flow_rate,
            slope,
        } => {
            let depth = manning::depth(&properties, &geometry, flow_rate, slope, config)?;
            let side_slope = open_side_slope(&geometry);
            (geometry, flow_rate, slope, depth, ChannelUnknown::Depth, side_slope)
        }
        ChannelProblem::Width {
            section,
            flow_rate,
            slope,
            depth,
        } => {
            let width = manning::width(&properties, section, flow_rate, slope, depth, config)?;
            let geometry = section.with_width(width);
            let side_slope = Some(section.side_slope());
            (geometry, flow_rate, slope, depth, ChannelUnknown::BottomWidth, side_slope)
        }
    };

    let gravity = units.gravity();
    let area = geometry.area(depth);
    let top_width = geometry.top_width(depth);
    let hydraulic_radius = geometry.hydraulic_radius(depth);
    let hydraulic_depth = geometry.hydraulic_depth(depth);
    let velocity = flow_rate / area;
    let froude_number = regime::froude(velocity, hydraulic_depth, gravity);

    let kinematic_viscosity = match properties.kinematic_viscosity {
        Some(nu) => nu,
        None => default_viscosity(&properties)?,
    };
    let reynolds_number = regime::channel_reynolds(velocity, hydraulic_radius, kinematic_viscosity);

    let critical_depth = critical_depth::solve(&geometry, flow_rate, units, config)?;
    let optimal = optimal_side_slope
        .map(|m| optimal::optimal_geometry(&properties, flow_rate, slope, m));
    let warnings = regime::check_channel(reynolds_number).into_iter().collect();

    tracing::debug!(
        ?solved_for,
        flow_rate,
        slope,
        depth,
        critical_depth,
        froude_number,
        "solved channel flow"
    );

    Ok(ChannelFlowState {
        flow_rate,
        roughness: properties.roughness,
        slope,
        depth,
        geometry,
        area,
        wetted_perimeter: geometry.wetted_perimeter(depth),
        top_width,
        hydraulic_radius,
        hydraulic_depth,
        velocity,
        specific_energy: depth + velocity * velocity / (2.0 * gravity),
        froude_number,
        regime: FroudeRegime::classify(froude_number, critical_band),
        critical_depth,
        kinematic_viscosity,
        reynolds_number,
        optimal,
        units,
        solved_for,
        warnings,
    })
}

/// Side slope of an open section with a bottom, for the optimal section.
fn open_side_slope(geometry: &ChannelGeometry) -> Option<f64> {
    match *geometry {
        ChannelGeometry::Rectangular { .. } => Some(0.0),
        ChannelGeometry::Trapezoidal { side_slope, .. } => Some(side_slope),
        ChannelGeometry::Triangular { .. } | ChannelGeometry::Circular { .. } => None,
    }
}

fn default_viscosity(properties: &ChannelProperties) -> Result<f64, InputError> {
    let temperature = ThermodynamicTemperature::new::<degree_celsius>(DEFAULT_WATER_CELSIUS);
    water::kinematic_viscosity_in(properties.units, temperature)
        .map_err(InputError::invalid("kinematic_viscosity"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::foot;

    use crate::support::{hydraulics::regime::CRITICAL_FROUDE_BAND, units::FlowUnits};

    fn solve_default(input: &ChannelFlowInput) -> ChannelFlowState {
        solve(input, &Config::default(), CRITICAL_FROUDE_BAND).expect("channel flow should solve")
    }

    fn trapezoid(bottom_width: Option<f64>) -> ChannelSection {
        ChannelSection::Trapezoidal {
            bottom_width,
            side_slope: 1.0,
        }
    }

    fn eng_trapezoid() -> ChannelFlowInput {
        ChannelFlowInput::new(trapezoid(Some(20.0)), 0.015, FlowUnits::Eng)
    }

    #[test]
    fn eng_worked_example() {
        let state = solve_default(&eng_trapezoid().with_flow_rate(360.0).with_depth(3.0));

        assert_eq!(state.solved_for, ChannelUnknown::Slope);
        assert_relative_eq!(state.slope, 0.00088, max_relative = 0.05);
        assert_relative_eq!(state.slope, 8.480e-4, max_relative = 1e-3);

        assert_relative_eq!(state.area, 69.0);
        assert_relative_eq!(state.velocity, 360.0 / 69.0);
        assert_relative_eq!(state.critical_depth, 2.0826, max_relative = 1e-4);
        assert!(state.critical_depth < state.depth);
        assert_relative_eq!(state.froude_number, 0.5644, max_relative = 1e-3);
        assert!(state.froude_number < 1.0);
        assert_eq!(state.regime, FroudeRegime::Subcritical);
        assert_relative_eq!(state.specific_energy, 3.4227, max_relative = 1e-4);

        // Water at 20 °C by default.
        assert_relative_eq!(state.kinematic_viscosity, 1.08e-5, max_relative = 0.01);
        assert!(state.warnings.is_empty());
        assert_eq!(state.optimal, None);

        let quantities = state.quantities();
        assert_relative_eq!(quantities.depth.get::<foot>(), 3.0, max_relative = 1e-12);
        assert_eq!(quantities.optimal_depth, None);
    }

    #[test]
    fn round_trip_depth_and_flow_rate() {
        let slope = solve_default(&eng_trapezoid().with_flow_rate(360.0).with_depth(3.0)).slope;

        let by_depth = solve_default(&eng_trapezoid().with_flow_rate(360.0).with_slope(slope));
        assert_eq!(by_depth.solved_for, ChannelUnknown::Depth);
        assert_relative_eq!(by_depth.depth, 3.0, max_relative = 1e-9);

        let by_flow = solve_default(&eng_trapezoid().with_depth(by_depth.depth).with_slope(slope));
        assert_eq!(by_flow.solved_for, ChannelUnknown::FlowRate);
        assert_relative_eq!(by_flow.flow_rate, 360.0, max_relative = 1e-9);
    }

    #[test]
    fn round_trip_circular() {
        let input = ChannelFlowInput::new(
            ChannelSection::Circular { diameter: 2.0 },
            0.013,
            FlowUnits::Si,
        );

        let q = solve_default(&input.with_depth(1.2).with_slope(0.001)).flow_rate;
        let state = solve_default(&input.with_flow_rate(q).with_slope(0.001));

        assert_relative_eq!(state.depth, 1.2, max_relative = 1e-9);
        assert!(state.critical_depth > 0.0 && state.critical_depth < 2.0);
        assert_eq!(state.optimal, None);
    }

    #[test]
    fn bottom_width_solve_reports_optimum() {
        let input = ChannelFlowInput::new(trapezoid(None), 0.015, FlowUnits::Eng)
            .with_flow_rate(360.0)
            .with_depth(3.0)
            .with_slope(8.480_315_930e-4);
        let state = solve_default(&input);

        assert_eq!(state.solved_for, ChannelUnknown::BottomWidth);
        assert!(matches!(
            state.geometry,
            ChannelGeometry::Trapezoidal { bottom_width, .. } if (bottom_width - 20.0).abs() < 1e-6
        ));

        let optimal = state.optimal.expect("optimum reported for width solve");
        assert_relative_eq!(optimal.depth, 5.789, max_relative = 1e-3);
        assert_relative_eq!(optimal.bottom_width, 4.796, max_relative = 1e-3);
    }

    #[test]
    fn rectangular_width_solve() {
        let rect = |width| ChannelSection::Rectangular { width };
        let q = solve_default(
            &ChannelFlowInput::new(rect(Some(5.0)), 0.013, FlowUnits::Si)
                .with_depth(1.0)
                .with_slope(0.001),
        )
        .flow_rate;

        let state = solve_default(
            &ChannelFlowInput::new(rect(None), 0.013, FlowUnits::Si)
                .with_flow_rate(q)
                .with_depth(1.0)
                .with_slope(0.001),
        );

        assert_eq!(state.geometry, ChannelGeometry::Rectangular { width: state.top_width });
        assert_relative_eq!(state.top_width, 5.0, max_relative = 1e-9);

        let optimal = state.optimal.expect("optimum reported for width solve");
        assert_relative_eq!(optimal.bottom_width, 2.0 * optimal.depth, max_relative = 1e-12);
    }

    #[test]
    fn optimum_only_for_dimension_solves() {
        let by_depth = solve_default(&eng_trapezoid().with_flow_rate(360.0).with_slope(0.001));
        assert!(by_depth.optimal.is_some());

        let by_flow = solve_default(&eng_trapezoid().with_depth(3.0).with_slope(0.001));
        assert!(by_flow.optimal.is_none());

        let vee = ChannelFlowInput::new(
            ChannelSection::Triangular { side_slope: 2.0 },
            0.015,
            FlowUnits::Si,
        );
        let by_vee_depth = solve_default(&vee.with_flow_rate(1.0).with_slope(0.001));
        assert!(by_vee_depth.optimal.is_none());
    }

    #[test]
    fn supercritical_steep_channel() {
        let input = ChannelFlowInput::new(
            ChannelSection::Rectangular { width: Some(3.0) },
            0.013,
            FlowUnits::Si,
        )
        .with_flow_rate(10.0)
        .with_slope(0.05);
        let state = solve_default(&input);

        assert!(state.depth < state.critical_depth);
        assert_eq!(state.regime, FroudeRegime::Supercritical);
        assert!(state.warnings.is_empty());
    }

    #[test]
    fn warns_for_low_reynolds_number() {
        // Thin sheet flow of a viscous fluid.
        let input = ChannelFlowInput::new(
            ChannelSection::Rectangular { width: Some(1.0) },
            0.012,
            FlowUnits::Si,
        )
        .with_depth(0.01)
        .with_slope(0.0001)
        .with_kinematic_viscosity(1.0e-4);
        let state = solve_default(&input);

        assert!(state.reynolds_number < 2000.0);
        assert!(state.warnings[0].to_string().starts_with("Re < 2000"));
    }

    #[test]
    fn rejects_wrong_number_of_unknowns() {
        let none = eng_trapezoid().with_flow_rate(360.0).with_depth(3.0).with_slope(0.001);
        assert!(matches!(
            solve(&none, &Config::default(), CRITICAL_FROUDE_BAND),
            Err(SolveError::Input(InputError::NoUnknown { .. }))
        ));

        let two = eng_trapezoid().with_flow_rate(360.0);
        assert!(matches!(
            solve(&two, &Config::default(), CRITICAL_FROUDE_BAND),
            Err(SolveError::Input(InputError::MultipleUnknowns { .. }))
        ));
    }

    #[test]
    fn circular_flow_above_capacity_is_a_convergence_error() {
        let input = ChannelFlowInput::new(
            ChannelSection::Circular { diameter: 0.5 },
            0.013,
            FlowUnits::Si,
        )
        .with_flow_rate(10.0)
        .with_slope(0.001);

        assert!(matches!(
            solve(&input, &Config::default(), CRITICAL_FROUDE_BAND),
            Err(SolveError::Convergence(_))
        ));
    }

    #[test]
    fn repeated_solves_are_identical() {
        let input = eng_trapezoid().with_flow_rate(360.0).with_slope(0.001);
        assert_eq!(solve_default(&input), solve_default(&input));
    }
}
