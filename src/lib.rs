//! # Twine Hydraulics
//!
//! Turbulent pipe and open-channel flow models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Each model takes a record of flow variables with exactly one left unset,
//! solves the governing (often implicit) relation for it, and returns the
//! completed state with Reynolds and Froude regime indicators.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate. Only
//! crate-level utilities are part of the public API; model-specific code
//! remains private.

pub mod models;
pub mod support;
