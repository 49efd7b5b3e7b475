//! Prismatic open-channel cross-sections.
//!
//! Each section is described by its fixed dimensions; the flow depth `y` is
//! passed to every method. Rectangular and triangular sections are the
//! `m = 0` and `b = 0` special cases of the trapezoid, but keep their own
//! variants so callers can say what they mean.

/// Depth of maximum discharge in a circular section, as a fraction of the
/// diameter.
///
/// Manning discharge `A·R^(2/3)` in a partially full pipe peaks just below
/// the crown (central angle ≈ 5.278 rad) and falls as the pipe fills.
pub const CIRCULAR_MAX_DISCHARGE_DEPTH_RATIO: f64 = 0.938;

/// A prismatic channel cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelGeometry {
    /// Vertical walls a distance `width` apart.
    Rectangular { width: f64 },

    /// V-shaped section with side slope `side_slope` horizontal to 1 vertical.
    Triangular { side_slope: f64 },

    /// Flat bottom of width `bottom_width` with side slopes `side_slope`
    /// horizontal to 1 vertical.
    Trapezoidal { bottom_width: f64, side_slope: f64 },

    /// Partially full circular conduit of diameter `diameter`.
    ///
    /// Depths are limited to `(0, diameter]`.
    Circular { diameter: f64 },
}

impl ChannelGeometry {
    /// Flow area `A(y)`.
    #[must_use]
    pub fn area(&self, depth: f64) -> f64 {
        match *self {
            Self::Rectangular { width } => width * depth,
            Self::Triangular { side_slope } => side_slope * depth * depth,
            Self::Trapezoidal {
                bottom_width,
                side_slope,
            } => (bottom_width + side_slope * depth) * depth,
            Self::Circular { diameter } => {
                let theta = central_angle(depth, diameter);
                diameter * diameter / 8.0 * (theta - theta.sin())
            }
        }
    }

    /// Wetted perimeter `P(y)`.
    #[must_use]
    pub fn wetted_perimeter(&self, depth: f64) -> f64 {
        match *self {
            Self::Rectangular { width } => width + 2.0 * depth,
            Self::Triangular { side_slope } => 2.0 * depth * wall_length(side_slope),
            Self::Trapezoidal {
                bottom_width,
                side_slope,
            } => bottom_width + 2.0 * depth * wall_length(side_slope),
            Self::Circular { diameter } => diameter * central_angle(depth, diameter) / 2.0,
        }
    }

    /// Free-surface width `B(y)`.
    #[must_use]
    pub fn top_width(&self, depth: f64) -> f64 {
        match *self {
            Self::Rectangular { width } => width,
            Self::Triangular { side_slope } => 2.0 * side_slope * depth,
            Self::Trapezoidal {
                bottom_width,
                side_slope,
            } => bottom_width + 2.0 * side_slope * depth,
            Self::Circular { diameter } => {
                diameter * (central_angle(depth, diameter) / 2.0).sin()
            }
        }
    }

    /// Hydraulic radius `R = A/P`.
    #[must_use]
    pub fn hydraulic_radius(&self, depth: f64) -> f64 {
        self.area(depth) / self.wetted_perimeter(depth)
    }

    /// Hydraulic depth `D_h = A/B`.
    ///
    /// Infinite for a circular section flowing full.
    #[must_use]
    pub fn hydraulic_depth(&self, depth: f64) -> f64 {
        self.area(depth) / self.top_width(depth)
    }

    /// Largest admissible flow depth, if the section is closed.
    #[must_use]
    pub fn max_depth(&self) -> Option<f64> {
        match *self {
            Self::Circular { diameter } => Some(diameter),
            _ => None,
        }
    }
}

/// Sloped wall length per unit depth, `√(1 + m²)`.
fn wall_length(side_slope: f64) -> f64 {
    side_slope.hypot(1.0)
}

/// Central angle subtended by the free surface of a partially full circle.
fn central_angle(depth: f64, diameter: f64) -> f64 {
    let cos_half = (1.0 - 2.0 * depth / diameter).clamp(-1.0, 1.0);
    2.0 * cos_half.acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    fn full_circle_area(diameter: f64) -> f64 {
        PI * diameter * diameter / 4.0
    }

    #[test]
    fn rectangular() {
        let section = ChannelGeometry::Rectangular { width: 4.0 };
        assert_relative_eq!(section.area(2.0), 8.0);
        assert_relative_eq!(section.wetted_perimeter(2.0), 8.0);
        assert_relative_eq!(section.top_width(2.0), 4.0);
        assert_relative_eq!(section.hydraulic_radius(2.0), 1.0);
        assert_relative_eq!(section.hydraulic_depth(2.0), 2.0);
        assert_eq!(section.max_depth(), None);
    }

    #[test]
    fn triangular() {
        let section = ChannelGeometry::Triangular { side_slope: 2.0 };
        assert_relative_eq!(section.area(1.5), 4.5);
        assert_relative_eq!(section.wetted_perimeter(1.5), 3.0 * 5.0_f64.sqrt());
        assert_relative_eq!(section.top_width(1.5), 6.0);
        assert_relative_eq!(section.hydraulic_depth(1.5), 0.75);
    }

    #[test]
    fn trapezoidal() {
        let section = ChannelGeometry::Trapezoidal {
            bottom_width: 20.0,
            side_slope: 1.0,
        };
        assert_relative_eq!(section.area(3.0), 69.0);
        assert_relative_eq!(section.wetted_perimeter(3.0), 20.0 + 6.0 * 2.0_f64.sqrt());
        assert_relative_eq!(section.top_width(3.0), 26.0);
    }

    #[test]
    fn trapezoid_reduces_to_special_cases() {
        let y = 1.3;

        let rect = ChannelGeometry::Rectangular { width: 3.0 };
        let flat = ChannelGeometry::Trapezoidal {
            bottom_width: 3.0,
            side_slope: 0.0,
        };
        assert_relative_eq!(rect.area(y), flat.area(y));
        assert_relative_eq!(rect.wetted_perimeter(y), flat.wetted_perimeter(y));
        assert_relative_eq!(rect.top_width(y), flat.top_width(y));

        let vee = ChannelGeometry::Triangular { side_slope: 1.5 };
        let pointed = ChannelGeometry::Trapezoidal {
            bottom_width: 0.0,
            side_slope: 1.5,
        };
        assert_relative_eq!(vee.area(y), pointed.area(y));
        assert_relative_eq!(vee.wetted_perimeter(y), pointed.wetted_perimeter(y));
        assert_relative_eq!(vee.top_width(y), pointed.top_width(y));
    }

    #[test]
    fn circular_half_and_full() {
        let d = 2.0;
        let section = ChannelGeometry::Circular { diameter: d };

        assert_relative_eq!(section.area(1.0), full_circle_area(d) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(section.wetted_perimeter(1.0), PI * d / 2.0, epsilon = 1e-12);
        assert_relative_eq!(section.top_width(1.0), d, epsilon = 1e-12);
        assert_relative_eq!(section.hydraulic_radius(1.0), d / 4.0, epsilon = 1e-12);

        assert_relative_eq!(section.area(d), full_circle_area(d), epsilon = 1e-12);
        assert_relative_eq!(section.wetted_perimeter(d), PI * d, epsilon = 1e-12);
        assert!(section.top_width(d).abs() < 1e-12);
        assert_eq!(section.max_depth(), Some(d));
    }

    #[test]
    fn circular_discharge_peaks_below_crown() {
        let section = ChannelGeometry::Circular { diameter: 1.0 };
        let conveyance = |y: f64| section.area(y) * section.hydraulic_radius(y).powf(2.0 / 3.0);

        let peak = conveyance(CIRCULAR_MAX_DISCHARGE_DEPTH_RATIO);
        assert!(peak > conveyance(0.90));
        assert!(peak > conveyance(1.0));
        assert!(peak > conveyance(0.97));
    }
}
