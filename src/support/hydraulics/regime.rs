//! Flow regime indicators.
//!
//! The pipe and channel relations in this crate assume fully turbulent flow.
//! A Reynolds number below the turbulence threshold does not stop a solve;
//! it attaches a [`RegimeWarning`] to the result instead. The Froude number
//! classifies open-channel flow and is reported as metadata only.

use std::fmt;

/// Pipe Reynolds number below which flow may not be turbulent.
pub const PIPE_TURBULENT_REYNOLDS: f64 = 4000.0;

/// Channel Reynolds number (based on hydraulic radius) below which flow may
/// not be turbulent.
pub const CHANNEL_TURBULENT_REYNOLDS: f64 = 2000.0;

/// Default half-width of the band around `Fr = 1` classified as critical.
pub const CRITICAL_FROUDE_BAND: f64 = 0.01;

/// Pipe Reynolds number `Re = V·D/ν`.
#[must_use]
pub fn pipe_reynolds(velocity: f64, diameter: f64, kinematic_viscosity: f64) -> f64 {
    velocity * diameter / kinematic_viscosity
}

/// Channel Reynolds number `Re = V·R/ν`.
#[must_use]
pub fn channel_reynolds(velocity: f64, hydraulic_radius: f64, kinematic_viscosity: f64) -> f64 {
    velocity * hydraulic_radius / kinematic_viscosity
}

/// Froude number `Fr = V/√(g·D_h)`.
#[must_use]
pub fn froude(velocity: f64, hydraulic_depth: f64, gravity: f64) -> f64 {
    velocity / (gravity * hydraulic_depth).sqrt()
}

/// Open-channel flow regime implied by the Froude number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FroudeRegime {
    /// `Fr < 1`: gravity waves can travel upstream.
    Subcritical,
    /// `Fr ≈ 1`.
    Critical,
    /// `Fr > 1`: the flow outruns gravity waves.
    Supercritical,
}

impl FroudeRegime {
    /// Classifies `froude`, treating `|Fr − 1| ≤ band` as critical.
    #[must_use]
    pub fn classify(froude: f64, band: f64) -> Self {
        if (froude - 1.0).abs() <= band {
            Self::Critical
        } else if froude < 1.0 {
            Self::Subcritical
        } else {
            Self::Supercritical
        }
    }
}

impl fmt::Display for FroudeRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Subcritical => "subcritical",
            Self::Critical => "critical",
            Self::Supercritical => "supercritical",
        })
    }
}

/// A non-fatal warning that the turbulent-flow assumption may not hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegimeWarning {
    /// Pipe Reynolds number below [`PIPE_TURBULENT_REYNOLDS`].
    PipeNotTurbulent { reynolds: f64 },
    /// Channel Reynolds number below [`CHANNEL_TURBULENT_REYNOLDS`].
    ChannelNotTurbulent { reynolds: f64 },
}

impl RegimeWarning {
    /// The Reynolds number that triggered the warning.
    #[must_use]
    pub fn reynolds(&self) -> f64 {
        match *self {
            Self::PipeNotTurbulent { reynolds } | Self::ChannelNotTurbulent { reynolds } => {
                reynolds
            }
        }
    }
}

impl fmt::Display for RegimeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PipeNotTurbulent { reynolds } => write!(
                f,
                "Re < 4000 (Re = {reynolds:.0}): flow may not be turbulent; \
                 Colebrook and Darcy-Weisbach assumptions may not hold"
            ),
            Self::ChannelNotTurbulent { reynolds } => write!(
                f,
                "Re < 2000 (Re = {reynolds:.0}): flow may not be turbulent; \
                 Manning assumptions may not hold"
            ),
        }
    }
}

/// Returns a warning if a pipe Reynolds number is below the turbulent range.
#[must_use]
pub fn check_pipe(reynolds: f64) -> Option<RegimeWarning> {
    (reynolds < PIPE_TURBULENT_REYNOLDS).then(|| {
        let warning = RegimeWarning::PipeNotTurbulent { reynolds };
        tracing::warn!(reynolds, "{warning}");
        warning
    })
}

/// Returns a warning if a channel Reynolds number is below the turbulent range.
#[must_use]
pub fn check_channel(reynolds: f64) -> Option<RegimeWarning> {
    (reynolds < CHANNEL_TURBULENT_REYNOLDS).then(|| {
        let warning = RegimeWarning::ChannelNotTurbulent { reynolds };
        tracing::warn!(reynolds, "{warning}");
        warning
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dimensionless_numbers() {
        assert_relative_eq!(pipe_reynolds(2.0, 0.5, 1.0e-6), 1.0e6, max_relative = 1e-12);
        assert_relative_eq!(channel_reynolds(1.0, 0.25, 1.0e-6), 2.5e5, max_relative = 1e-12);
        assert_relative_eq!(froude(3.0, 1.0, 9.0), 1.0);
    }

    #[test]
    fn classifies_froude_number() {
        let classify = |fr| FroudeRegime::classify(fr, CRITICAL_FROUDE_BAND);

        assert_eq!(classify(0.56), FroudeRegime::Subcritical);
        assert_eq!(classify(1.005), FroudeRegime::Critical);
        assert_eq!(classify(0.995), FroudeRegime::Critical);
        assert_eq!(classify(1.8), FroudeRegime::Supercritical);
        assert_eq!(FroudeRegime::classify(1.005, 0.0), FroudeRegime::Supercritical);
    }

    #[test]
    fn pipe_warning_threshold() {
        assert_eq!(check_pipe(4000.0), None);
        assert_eq!(check_pipe(3.6e5), None);

        let warning = check_pipe(2500.0).expect("should warn");
        assert_eq!(warning, RegimeWarning::PipeNotTurbulent { reynolds: 2500.0 });
        assert!(warning.to_string().starts_with("Re < 4000"));
    }

    #[test]
    fn channel_warning_threshold() {
        assert_eq!(check_channel(2000.0), None);

        let warning = check_channel(150.0).expect("should warn");
        assert_relative_eq!(warning.reynolds(), 150.0);
        assert!(warning.to_string().starts_with("Re < 2000"));
    }
}
