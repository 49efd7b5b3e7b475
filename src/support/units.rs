//! Unit systems and extensions to [`uom`].
//!
//! The hydraulic solvers compute on plain `f64` values expressed in the base
//! units of a [`FlowUnits`] system (SI: metres and seconds; Eng: feet and
//! seconds). [`uom`] is the boundary type: [`FlowUnits`] converts solver
//! values into dimensioned quantities and back.
//!
//! ```
//! use twine_hydraulics::support::units::FlowUnits;
//! use uom::si::length::meter;
//!
//! let units: FlowUnits = "Eng".parse().unwrap();
//! assert_eq!(units.gravity(), 32.2);
//!
//! let diameter = units.length(1.0);
//! assert!((diameter.get::<meter>() - 0.3048).abs() < 1e-12);
//! ```

mod flow_units;

pub use flow_units::{FlowUnits, UnitsError};

/// Kinematic viscosity, `μ/ρ`.
///
/// [`uom`] names the m²/s dimension after diffusion; the alias keeps the
/// hydraulic name at every call site.
pub type KinematicViscosity = uom::si::f64::DiffusionCoefficient;
