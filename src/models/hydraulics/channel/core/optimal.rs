//! Hydraulically optimal trapezoidal section.
//!
//! For a given flow rate, roughness, slope and side slope, the section with
//! the smallest wetted perimeter (and so the least lining) has a hydraulic
//! radius of half its depth:
//!
//! ```text
//! y_opt = 2^(1/4) · (Q·n / (C·(2√(1+m²) − m)·√S))^(3/8)
//! b_opt = 2·y_opt·(√(1+m²) − m)
//! ```

use super::input::ChannelProperties;

/// Depth and bottom width of the hydraulically optimal section.
///
/// Informational only: the solved state keeps its own depth and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalGeometry {
    /// Optimal flow depth `y_opt`.
    pub depth: f64,

    /// Optimal bottom width `b_opt`.
    pub bottom_width: f64,
}

/// Computes the optimal section for side slope `side_slope`.
pub(super) fn optimal_geometry(
    properties: &ChannelProperties,
    flow_rate: f64,
    slope: f64,
    side_slope: f64,
) -> OptimalGeometry {
    let wall = side_slope.hypot(1.0);
    let c = properties.units.manning_coefficient();

    let depth = 2.0_f64.powf(0.25)
        * (flow_rate * properties.roughness / (c * (2.0 * wall - side_slope) * slope.sqrt()))
            .powf(0.375);

    OptimalGeometry {
        depth,
        bottom_width: 2.0 * depth * (wall - side_slope),
    }
}
