//! Minimal prelude for application code.
//!
//! Goal: reduce import noise without hiding important concepts.

pub use crate::facade::{Facade, FacadeBuilder};
pub use crate::subsystem::{Countdown, Launcher, SubsystemA, SubsystemB};
