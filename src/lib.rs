//! # launch-control
//!
//! A minimal facade over the launch-sequence subsystems. The [`Facade`] owns the
//! countdown and launcher collaborators and exposes a single composite
//! [`Facade::operation`] that drives them in a fixed order, so callers never touch
//! the individual subsystem interfaces.
//!
//! ## Overview
//!
//! Two stateless subsystems participate in a launch: [`SubsystemA`] answers the
//! countdown calls (`ready`, `go`) and [`SubsystemB`] answers the launcher calls
//! (`get_ready`, `fire`). The facade interleaves them so both report readiness
//! before either acts, and returns the whole transcript as one `String`.
//!
//! Ownership is transfer-based: constructing a facade consumes the subsystems, and
//! dropping the facade releases them exactly once. Callers that need a subsystem
//! back use [`Facade::into_parts`].
//!
//! ## Quick Start
//!
//! ```rust
//! use launch_control::Facade;
//!
//! let facade = Facade::default();
//! print!("{}", facade.operation());
//! ```
//!
//! Supplying your own subsystems, or only one of them, goes through the builder:
//!
//! ```rust
//! use launch_control::{Facade, SubsystemA};
//!
//! let facade = Facade::builder().subsystem_a(SubsystemA).build();
//! assert_eq!(facade.operation(), Facade::default().operation());
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`facade`] | The [`Facade`] and its builder |
//! | [`subsystem`] | Subsystem contracts and the two concrete collaborators |
//! | [`prelude`] | One-stop imports for application code |

pub mod facade;
pub mod prelude;
pub mod subsystem;

// Re-export main types for convenience
pub use facade::{Facade, FacadeBuilder};
pub use subsystem::{Countdown, Launcher, SubsystemA, SubsystemB};
