//! Full-pipe flow solver.
//!
//! The head loss solve is closed form once the friction factor is known.
//! Flow rate and diameter solves wrap the whole Colebrook evaluation in an
//! outer root find, seeded from Darcy–Weisbach at a nominal friction factor.

mod darcy_weisbach;
mod input;
mod state;

pub use input::{PipeFlowInput, PipeUnknown};
pub use state::{PipeFlowState, PipeQuantities};

use crate::{
    models::hydraulics::SolveError,
    support::{
        hydraulics::regime,
        root_finder::{self, Config},
    },
};

use darcy_weisbach::{Evaluation, NOMINAL_FRICTION_FACTOR};
use input::{PipeProblem, PipeProperties};

/// Solves a pipe flow problem for its single unknown.
pub(super) fn solve(input: &PipeFlowInput, config: &Config) -> Result<PipeFlowState, SolveError> {
    let (problem, properties) = input.validate()?;

    let (flow_rate, diameter, known_head_loss, solved_for) = match problem {
        PipeProblem::HeadLoss {
            flow_rate,
            diameter,
        } => (flow_rate, diameter, None, PipeUnknown::HeadLoss),
        PipeProblem::FlowRate {
            diameter,
            head_loss,
        } => {
            let flow_rate = solve_flow_rate(&properties, diameter, head_loss, config)?;
            (flow_rate, diameter, Some(head_loss), PipeUnknown::FlowRate)
        }
        PipeProblem::Diameter {
            flow_rate,
            head_loss,
        } => {
            let diameter = solve_diameter(&properties, flow_rate, head_loss, config)?;
            (flow_rate, diameter, Some(head_loss), PipeUnknown::Diameter)
        }
    };

    let Evaluation {
        velocity,
        reynolds_number,
        friction_factor,
        head_loss,
    } = darcy_weisbach::evaluate(&properties, flow_rate, diameter, config)?;
    let head_loss = known_head_loss.unwrap_or(head_loss);

    let warnings = regime::check_pipe(reynolds_number).into_iter().collect();

    tracing::debug!(
        ?solved_for,
        flow_rate,
        diameter,
        head_loss,
        friction_factor,
        reynolds_number,
        "solved pipe flow"
    );

    Ok(PipeFlowState {
        flow_rate,
        diameter,
        length: properties.length,
        roughness: properties.roughness,
        kinematic_viscosity: properties.kinematic_viscosity,
        head_loss,
        friction_factor,
        reynolds_number,
        velocity,
        units: properties.units,
        solved_for,
        warnings,
    })
}

fn solve_flow_rate(
    properties: &PipeProperties,
    diameter: f64,
    head_loss: f64,
    config: &Config,
) -> Result<f64, SolveError> {
    let guess = darcy_weisbach::flow_rate_estimate(
        properties,
        NOMINAL_FRICTION_FACTOR,
        diameter,
        head_loss,
    );

    let residual = |q: f64| -> Result<f64, SolveError> {
        let eval = darcy_weisbach::evaluate(properties, q, diameter, config)?;
        Ok(eval.head_loss - head_loss)
    };

    let solution = root_finder::try_solve_from_guess(residual, guess, config)?;

    Ok(solution.x)
}

fn solve_diameter(
    properties: &PipeProperties,
    flow_rate: f64,
    head_loss: f64,
    config: &Config,
) -> Result<f64, SolveError> {
    let guess = darcy_weisbach::diameter_estimate(
        properties,
        NOMINAL_FRICTION_FACTOR,
        flow_rate,
        head_loss,
    );

    let residual = |d: f64| -> Result<f64, SolveError> {
        let eval = darcy_weisbach::evaluate(properties, flow_rate, d, config)?;
        Ok(eval.head_loss - head_loss)
    };

    let solution = root_finder::try_solve_from_guess(residual, guess, config)?;

    Ok(solution.x)
}
