//! Supporting utilities used by models.
//!
//! These modules are public but their APIs are not stable.

pub mod constraint;
pub mod hydraulics;
pub mod root_finder;
pub mod units;
pub mod water;
