//! Turbulent pipe and open-channel hydraulics toolkit.
//!
//! Building blocks shared by the [pipe](crate::models::hydraulics::pipe) and
//! [channel](crate::models::hydraulics::channel) flow models:
//!
//! - [`colebrook`]: Darcy friction factor from the implicit Colebrook equation
//! - [`geometry`]: Flow area, wetted perimeter and top width of prismatic sections
//! - [`critical_depth`]: Depth at which the Froude number equals one
//! - [`regime`]: Reynolds and Froude numbers and turbulence warnings
//!
//! All functions work on raw `f64` values in the base units of a
//! [`FlowUnits`](crate::support::units::FlowUnits) system.
//!
//! # Example
//!
//! ```
//! use twine_hydraulics::support::{
//!     hydraulics::{critical_depth, geometry::ChannelGeometry, regime},
//!     root_finder::Config,
//!     units::FlowUnits,
//! };
//!
//! let channel = ChannelGeometry::Rectangular { width: 10.0 };
//! let yc = critical_depth::solve(&channel, 50.0, FlowUnits::Si, &Config::default()).unwrap();
//!
//! let velocity = 50.0 / channel.area(yc);
//! let froude = regime::froude(velocity, channel.hydraulic_depth(yc), FlowUnits::Si.gravity());
//! assert!((froude - 1.0).abs() < 1e-9);
//! ```

pub mod colebrook;
pub mod critical_depth;
pub mod geometry;
pub mod regime;
