//! Pipe and open-channel flow models.
//!
//! Each model takes a record of flow variables with exactly one left unset,
//! solves for it, and returns the completed state together with derived
//! regime indicators:
//!
//! - [`pipe::PipeFlow`]: Darcy–Weisbach with the Colebrook friction factor.
//!   Solves for flow rate, diameter, or friction head loss.
//! - [`channel::ChannelFlow`]: Manning's equation in prismatic channels.
//!   Solves for flow rate, slope, depth, or bottom width, and reports the
//!   critical depth and the hydraulically optimal section.

pub mod channel;
mod error;
pub mod pipe;

pub use error::{InputError, SolveError};
