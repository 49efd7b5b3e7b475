//! Darcy–Weisbach head loss with a Colebrook friction factor.

use std::f64::consts::PI;

use crate::{
    models::hydraulics::SolveError,
    support::{
        hydraulics::{colebrook, regime},
        root_finder::Config,
    },
};

use super::input::PipeProperties;

/// Friction factor used to seed the flow rate and diameter searches.
pub(super) const NOMINAL_FRICTION_FACTOR: f64 = 0.02;

/// Flow quantities at a given flow rate and diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Evaluation {
    pub(super) velocity: f64,
    pub(super) reynolds_number: f64,
    pub(super) friction_factor: f64,
    pub(super) head_loss: f64,
}

/// Evaluates the pipe at flow rate `q` and diameter `d`.
pub(super) fn evaluate(
    properties: &PipeProperties,
    flow_rate: f64,
    diameter: f64,
    config: &Config,
) -> Result<Evaluation, SolveError> {
    let velocity = 4.0 * flow_rate / (PI * diameter * diameter);
    let reynolds_number = regime::pipe_reynolds(velocity, diameter, properties.kinematic_viscosity);
    let friction_factor =
        colebrook::friction_factor(reynolds_number, properties.roughness / diameter, config)?;

    Ok(Evaluation {
        velocity,
        reynolds_number,
        friction_factor,
        head_loss: head_loss(properties, friction_factor, flow_rate, diameter),
    })
}

/// Friction head loss `hf = 8·f·L·Q² / (π²·g·D⁵)`.
pub(super) fn head_loss(
    properties: &PipeProperties,
    friction_factor: f64,
    flow_rate: f64,
    diameter: f64,
) -> f64 {
    8.0 * friction_factor * properties.length * flow_rate * flow_rate
        / (PI * PI * properties.units.gravity() * diameter.powi(5))
}

/// Flow rate producing `head_loss` at a fixed friction factor.
pub(super) fn flow_rate_estimate(
    properties: &PipeProperties,
    friction_factor: f64,
    diameter: f64,
    head_loss: f64,
) -> f64 {
    (head_loss * PI * PI * properties.units.gravity() * diameter.powi(5)
        / (8.0 * friction_factor * properties.length))
        .sqrt()
}

/// Diameter producing `head_loss` at a fixed friction factor.
pub(super) fn diameter_estimate(
    properties: &PipeProperties,
    friction_factor: f64,
    flow_rate: f64,
    head_loss: f64,
) -> f64 {
    (8.0 * friction_factor * properties.length * flow_rate * flow_rate
        / (PI * PI * properties.units.gravity() * head_loss))
        .powf(0.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::FlowUnits;

    fn properties() -> PipeProperties {
        PipeProperties {
            length: 100.0,
            roughness: 4.5e-5,
            kinematic_viscosity: 1.0e-6,
            units: FlowUnits::Si,
        }
    }

    #[test]
    fn head_loss_formula() {
        // hf = f·(L/D)·V²/(2g) with V = 4Q/(πD²).
        let p = properties();
        let (q, d, f) = (0.1, 0.3, 0.018);
        let v = 4.0 * q / (PI * d * d);
        let expected = f * (p.length / d) * v * v / (2.0 * p.units.gravity());
        assert_relative_eq!(head_loss(&p, f, q, d), expected, max_relative = 1e-12);
    }

    #[test]
    fn estimates_invert_head_loss() {
        let p = properties();
        let f = NOMINAL_FRICTION_FACTOR;
        let hf = head_loss(&p, f, 0.1, 0.3);
        assert_relative_eq!(flow_rate_estimate(&p, f, 0.3, hf), 0.1, max_relative = 1e-12);
        assert_relative_eq!(diameter_estimate(&p, f, 0.1, hf), 0.3, max_relative = 1e-12);
    }

    #[test]
    fn evaluation_is_consistent() {
        let p = properties();
        let eval = evaluate(&p, 0.1, 0.3, &Config::default()).unwrap();

        assert_relative_eq!(eval.velocity, 1.414_710_605, max_relative = 1e-8);
        assert_relative_eq!(eval.reynolds_number, eval.velocity * 0.3 / 1.0e-6);
        assert_relative_eq!(
            eval.head_loss,
            head_loss(&p, eval.friction_factor, 0.1, 0.3),
            max_relative = 1e-12
        );
    }
}
