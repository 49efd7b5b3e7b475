use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    area::{square_foot, square_meter},
    diffusion_coefficient::square_meter_per_second,
    f64::{Area, Length, Velocity, VolumeRate},
    length::{foot, meter},
    velocity::{foot_per_second, meter_per_second},
    volume_rate::{cubic_foot_per_second, cubic_meter_per_second},
};

use super::KinematicViscosity;

/// Square metres per square foot.
const SQUARE_METERS_PER_SQUARE_FOOT: f64 = 0.3048 * 0.3048;

/// The unit system a hydraulic problem is posed in.
///
/// Selects the gravitational acceleration and the Manning equation
/// coefficient, and fixes the base units of every raw value passed to or
/// returned from a solver:
///
/// | Quantity            | `Si`   | `Eng`   |
/// |---------------------|--------|---------|
/// | length              | m      | ft      |
/// | flow rate           | m³/s   | ft³/s   |
/// | velocity            | m/s    | ft/s    |
/// | kinematic viscosity | m²/s   | ft²/s   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowUnits {
    /// Metres and seconds.
    #[default]
    Si,
    /// US customary feet and seconds.
    Eng,
}

/// Error returned when a unit system label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised unit system {label:?}, expected \"SI\" or \"Eng\"")]
pub struct UnitsError {
    /// The rejected label.
    pub label: String,
}

impl FlowUnits {
    /// Gravitational acceleration in base units (m/s² or ft/s²).
    #[must_use]
    pub fn gravity(self) -> f64 {
        match self {
            Self::Si => 9.81,
            Self::Eng => 32.2,
        }
    }

    /// Dimensional coefficient `C` in Manning's equation `Q = (C/n)·A·R^(2/3)·S^(1/2)`.
    #[must_use]
    pub fn manning_coefficient(self) -> f64 {
        match self {
            Self::Si => 1.0,
            Self::Eng => 1.49,
        }
    }

    /// Tags a raw length.
    #[must_use]
    pub fn length(self, value: f64) -> Length {
        match self {
            Self::Si => Length::new::<meter>(value),
            Self::Eng => Length::new::<foot>(value),
        }
    }

    /// Extracts a raw length in this system's base unit.
    #[must_use]
    pub fn length_value(self, length: Length) -> f64 {
        match self {
            Self::Si => length.get::<meter>(),
            Self::Eng => length.get::<foot>(),
        }
    }

    /// Tags a raw volumetric flow rate.
    #[must_use]
    pub fn flow_rate(self, value: f64) -> VolumeRate {
        match self {
            Self::Si => VolumeRate::new::<cubic_meter_per_second>(value),
            Self::Eng => VolumeRate::new::<cubic_foot_per_second>(value),
        }
    }

    /// Extracts a raw volumetric flow rate in this system's base unit.
    #[must_use]
    pub fn flow_rate_value(self, flow_rate: VolumeRate) -> f64 {
        match self {
            Self::Si => flow_rate.get::<cubic_meter_per_second>(),
            Self::Eng => flow_rate.get::<cubic_foot_per_second>(),
        }
    }

    /// Tags a raw flow area.
    #[must_use]
    pub fn area(self, value: f64) -> Area {
        match self {
            Self::Si => Area::new::<square_meter>(value),
            Self::Eng => Area::new::<square_foot>(value),
        }
    }

    /// Tags a raw velocity.
    #[must_use]
    pub fn velocity(self, value: f64) -> Velocity {
        match self {
            Self::Si => Velocity::new::<meter_per_second>(value),
            Self::Eng => Velocity::new::<foot_per_second>(value),
        }
    }

    /// Tags a raw kinematic viscosity.
    #[must_use]
    pub fn kinematic_viscosity(self, value: f64) -> KinematicViscosity {
        match self {
            Self::Si => KinematicViscosity::new::<square_meter_per_second>(value),
            Self::Eng => KinematicViscosity::new::<square_meter_per_second>(
                value * SQUARE_METERS_PER_SQUARE_FOOT,
            ),
        }
    }

    /// Extracts a raw kinematic viscosity in this system's base unit.
    #[must_use]
    pub fn kinematic_viscosity_value(self, viscosity: KinematicViscosity) -> f64 {
        let si = viscosity.get::<square_meter_per_second>();
        match self {
            Self::Si => si,
            Self::Eng => si / SQUARE_METERS_PER_SQUARE_FOOT,
        }
    }
}

impl FromStr for FlowUnits {
    type Err = UnitsError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "si" => Ok(Self::Si),
            "eng" | "english" | "us" => Ok(Self::Eng),
            _ => Err(UnitsError {
                label: label.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FlowUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Si => "SI",
            Self::Eng => "Eng",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::inch, volume_rate::cubic_meter_per_second};

    #[test]
    fn constants() {
        assert_relative_eq!(FlowUnits::Si.gravity(), 9.81);
        assert_relative_eq!(FlowUnits::Eng.gravity(), 32.2);
        assert_relative_eq!(FlowUnits::Si.manning_coefficient(), 1.0);
        assert_relative_eq!(FlowUnits::Eng.manning_coefficient(), 1.49);
    }

    #[test]
    fn parses_labels() {
        assert_eq!("SI".parse::<FlowUnits>(), Ok(FlowUnits::Si));
        assert_eq!(" si ".parse::<FlowUnits>(), Ok(FlowUnits::Si));
        assert_eq!("Eng".parse::<FlowUnits>(), Ok(FlowUnits::Eng));
        assert_eq!("ENG".parse::<FlowUnits>(), Ok(FlowUnits::Eng));

        let err = "imperial".parse::<FlowUnits>().unwrap_err();
        assert_eq!(err.label, "imperial");
    }

    #[test]
    fn display_round_trips() {
        for units in [FlowUnits::Si, FlowUnits::Eng] {
            assert_eq!(units.to_string().parse::<FlowUnits>(), Ok(units));
        }
    }

    #[test]
    fn converts_lengths() {
        let length = FlowUnits::Eng.length(20.0 / 12.0);
        assert_relative_eq!(length.get::<inch>(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(FlowUnits::Si.length_value(length), 0.508, epsilon = 1e-12);
    }

    #[test]
    fn converts_flow_rates() {
        let flow_rate = FlowUnits::Eng.flow_rate(1.0);
        assert_relative_eq!(
            flow_rate.get::<cubic_meter_per_second>(),
            0.028_316_846_592,
            epsilon = 1e-7
        );
        assert_relative_eq!(FlowUnits::Eng.flow_rate_value(flow_rate), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn converts_kinematic_viscosity() {
        let nu = FlowUnits::Eng.kinematic_viscosity(1.0);
        assert_relative_eq!(
            nu.get::<square_meter_per_second>(),
            0.092_903_04,
            epsilon = 1e-12
        );
        assert_relative_eq!(FlowUnits::Eng.kinematic_viscosity_value(nu), 1.0, epsilon = 1e-12);
        assert_relative_eq!(FlowUnits::Si.kinematic_viscosity_value(nu), 0.092_903_04);
    }
}
