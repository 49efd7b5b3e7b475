//! Manning's equation `Q = (C/n)·A·R^(2/3)·√S` and its inverses.

use crate::support::{
    hydraulics::geometry::{CIRCULAR_MAX_DISCHARGE_DEPTH_RATIO, ChannelGeometry},
    root_finder::{self, Bracket, Config, ConvergenceError},
};

use super::input::{ChannelProperties, WidthSection};

/// Smallest depth searched in a circular section, as a fraction of the
/// diameter.
const CIRCULAR_MIN_DEPTH_RATIO: f64 = 1e-9;

/// Section factor `A·R^(2/3)`.
pub(super) fn conveyance(geometry: &ChannelGeometry, depth: f64) -> f64 {
    geometry.area(depth) * geometry.hydraulic_radius(depth).powf(2.0 / 3.0)
}

/// Flow rate at normal depth `depth` on slope `slope`.
pub(super) fn flow_rate(
    properties: &ChannelProperties,
    geometry: &ChannelGeometry,
    depth: f64,
    slope: f64,
) -> f64 {
    properties.units.manning_coefficient() / properties.roughness
        * conveyance(geometry, depth)
        * slope.sqrt()
}

/// Slope that carries `flow_rate` at normal depth `depth`.
pub(super) fn slope(
    properties: &ChannelProperties,
    geometry: &ChannelGeometry,
    depth: f64,
    flow_rate: f64,
) -> f64 {
    let root = flow_rate * properties.roughness
        / (properties.units.manning_coefficient() * conveyance(geometry, depth));
    root * root
}

/// Normal depth that carries `flow_rate` on slope `slope`.
///
/// Circular sections are searched up to the depth of maximum discharge, so
/// a flow above the section's capacity fails to bracket.
pub(super) fn depth(
    properties: &ChannelProperties,
    geometry: &ChannelGeometry,
    flow_rate: f64,
    slope: f64,
    config: &Config,
) -> Result<f64, ConvergenceError> {
    let residual = |y: f64| self::flow_rate(properties, geometry, y, slope) - flow_rate;

    let bracket = match *geometry {
        ChannelGeometry::Circular { diameter } => Bracket::fixed(
            CIRCULAR_MIN_DEPTH_RATIO * diameter,
            CIRCULAR_MAX_DISCHARGE_DEPTH_RATIO * diameter,
        ),
        _ => {
            let target = target_conveyance(properties, flow_rate, slope);
            Bracket::around(depth_estimate(geometry, target))
        }
    };

    Ok(root_finder::solve(residual, bracket, config)?.x)
}

/// Width of a rectangular or trapezoidal section that carries `flow_rate`
/// at normal depth `depth`.
pub(super) fn width(
    properties: &ChannelProperties,
    section: WidthSection,
    flow_rate: f64,
    slope: f64,
    depth: f64,
    config: &Config,
) -> Result<f64, ConvergenceError> {
    let residual = |b: f64| {
        self::flow_rate(properties, &section.with_width(b), depth, slope) - flow_rate
    };

    // The wide-channel width ignores the wall perimeter and so undershoots
    // a rectangular root; the upper endpoint grows until it passes the root.
    let wide = target_conveyance(properties, flow_rate, slope) / depth.powf(5.0 / 3.0);
    let bracket = Bracket::expand_upper(0.0, wide);

    Ok(root_finder::solve(residual, bracket, config)?.x)
}

/// `A·R^(2/3)` required to carry `flow_rate` on `slope`.
fn target_conveyance(properties: &ChannelProperties, flow_rate: f64, slope: f64) -> f64 {
    flow_rate * properties.roughness / (properties.units.manning_coefficient() * slope.sqrt())
}

/// Closed-form normal depth of the wide rectangular or triangular channel
/// closest to `geometry`.
fn depth_estimate(geometry: &ChannelGeometry, target: f64) -> f64 {
    let wide = |width: f64| (target / width).powf(0.6);
    let vee = |m: f64| {
        let wall = 2.0 * m.hypot(1.0);
        (target * wall.powf(2.0 / 3.0) / m.powf(5.0 / 3.0)).powf(0.375)
    };

    match *geometry {
        ChannelGeometry::Rectangular { width } => wide(width),
        ChannelGeometry::Trapezoidal { bottom_width, .. } if bottom_width > 0.0 => {
            wide(bottom_width)
        }
        ChannelGeometry::Triangular { side_slope }
        | ChannelGeometry::Trapezoidal { side_slope, .. } => vee(side_slope),
        ChannelGeometry::Circular { diameter } => 0.5 * diameter,
    }
}
