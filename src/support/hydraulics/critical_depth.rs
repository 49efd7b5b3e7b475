//! Critical depth of open-channel flow.
//!
//! Critical flow has a Froude number of one, which for a prismatic section
//! is `Q²·B(y) / (g·A(y)³) = 1`. The relation is closed form only for
//! rectangular and triangular sections; every section is solved numerically
//! here, seeded from those closed forms where they apply.
//!
//! The residual is `ln(Fr²)`: `Fr²` spans dozens of decades between a
//! near-empty and a full circular section.

use crate::support::{
    root_finder::{self, Bracket, Config, ConvergenceError},
    units::FlowUnits,
};

use super::geometry::ChannelGeometry;

/// Smallest depth searched in a circular section, as a fraction of the
/// diameter.
const CIRCULAR_MIN_DEPTH_RATIO: f64 = 1e-9;

/// Squared Froude number `Q²·B / (g·A³)` at depth `y`.
#[must_use]
pub fn froude_squared(
    geometry: &ChannelGeometry,
    flow_rate: f64,
    depth: f64,
    gravity: f64,
) -> f64 {
    let area = geometry.area(depth);
    flow_rate * flow_rate * geometry.top_width(depth) / (gravity * area * area * area)
}

/// Solves for the critical depth of `flow_rate` in `geometry`.
///
/// # Errors
///
/// Returns a [`ConvergenceError`] if the root finder fails, including when
/// the inputs are such that no depth brackets the critical state.
///
/// # Example
///
/// ```
/// use twine_hydraulics::support::{
///     hydraulics::{critical_depth, geometry::ChannelGeometry},
///     root_finder::Config,
///     units::FlowUnits,
/// };
///
/// // Rectangular channel: yc = (q²/g)^(1/3) with q = Q/b.
/// let channel = ChannelGeometry::Rectangular { width: 20.0 };
/// let yc = critical_depth::solve(&channel, 360.0, FlowUnits::Eng, &Config::default()).unwrap();
/// assert!((yc - (18.0_f64.powi(2) / 32.2).cbrt()).abs() < 1e-9);
/// ```
pub fn solve(
    geometry: &ChannelGeometry,
    flow_rate: f64,
    units: FlowUnits,
    config: &Config,
) -> Result<f64, ConvergenceError> {
    let gravity = units.gravity();
    let residual = |y: f64| froude_squared(geometry, flow_rate, y, gravity).ln();

    let solution = match *geometry {
        ChannelGeometry::Circular { diameter } => root_finder::solve(
            residual,
            Bracket::fixed(CIRCULAR_MIN_DEPTH_RATIO * diameter, diameter),
            config,
        )?,
        _ => {
            let guess = initial_guess(geometry, flow_rate, gravity);
            root_finder::solve_from_guess(residual, guess, config)?
        }
    };

    tracing::debug!(critical_depth = solution.x, flow_rate, "solved critical depth");
    Ok(solution.x)
}

/// Closed-form critical depth of the rectangular or triangular section
/// closest to `geometry`.
fn initial_guess(geometry: &ChannelGeometry, flow_rate: f64, gravity: f64) -> f64 {
    let q2_over_g = flow_rate * flow_rate / gravity;
    let rectangular = |width: f64| (q2_over_g / (width * width)).cbrt();
    let triangular = |side_slope: f64| (2.0 * q2_over_g / (side_slope * side_slope)).powf(0.2);

    match *geometry {
        ChannelGeometry::Rectangular { width } => rectangular(width),
        ChannelGeometry::Triangular { side_slope } => triangular(side_slope),
        ChannelGeometry::Trapezoidal { bottom_width, .. } if bottom_width > 0.0 => {
            rectangular(bottom_width)
        }
        ChannelGeometry::Trapezoidal { side_slope, .. } => triangular(side_slope),
        ChannelGeometry::Circular { diameter } => 0.5 * diameter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve_default(geometry: &ChannelGeometry, flow_rate: f64, units: FlowUnits) -> f64 {
        solve(geometry, flow_rate, units, &Config::default()).expect("critical depth should solve")
    }

    #[test]
    fn froude_is_one_at_critical_depth() {
        let cases = [
            (ChannelGeometry::Rectangular { width: 3.0 }, 12.0),
            (ChannelGeometry::Triangular { side_slope: 1.5 }, 2.0),
            (
                ChannelGeometry::Trapezoidal {
                    bottom_width: 20.0,
                    side_slope: 1.0,
                },
                360.0,
            ),
            (
                ChannelGeometry::Trapezoidal {
                    bottom_width: 0.0,
                    side_slope: 2.0,
                },
                5.0,
            ),
            (ChannelGeometry::Circular { diameter: 2.0 }, 3.0),
            (ChannelGeometry::Circular { diameter: 0.5 }, 0.01),
        ];

        for units in [FlowUnits::Si, FlowUnits::Eng] {
            for (geometry, flow_rate) in cases {
                let yc = solve_default(&geometry, flow_rate, units);
                let fr2 = froude_squared(&geometry, flow_rate, yc, units.gravity());
                assert_relative_eq!(fr2, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn matches_closed_forms() {
        let g = FlowUnits::Si.gravity();

        let rect = ChannelGeometry::Rectangular { width: 4.0 };
        let rect = solve_default(&rect, 10.0, FlowUnits::Si);
        assert_relative_eq!(rect, (2.5_f64.powi(2) / g).cbrt(), max_relative = 1e-10);

        let tri = ChannelGeometry::Triangular { side_slope: 1.0 };
        let tri = solve_default(&tri, 3.0, FlowUnits::Si);
        assert_relative_eq!(tri, (2.0 * 9.0 / g).powf(0.2), max_relative = 1e-10);
    }

    #[test]
    fn worked_trapezoidal_channel() {
        // Q = 360 ft³/s, b = 20 ft, m = 1.
        let geometry = ChannelGeometry::Trapezoidal {
            bottom_width: 20.0,
            side_slope: 1.0,
        };
        let yc = solve_default(&geometry, 360.0, FlowUnits::Eng);
        assert_relative_eq!(yc, 2.08, max_relative = 0.01);
    }

    #[test]
    fn circular_stays_inside_pipe() {
        let geometry = ChannelGeometry::Circular { diameter: 1.0 };
        let yc = solve_default(&geometry, 1.0, FlowUnits::Si);
        assert!(yc > 0.0 && yc < 1.0);
    }
}
