//! Subsystem contracts and the two concrete collaborators.
//!
//! The subsystems accept requests either from the facade or from a client
//! directly; to them the facade is just another caller. The contracts are traits
//! so tests can inject instrumented implementations at the facade seam.

mod primary;
mod secondary;

pub use primary::SubsystemA;
pub use secondary::SubsystemB;

/// The countdown side of the launch sequence.
///
/// Both operations are total: they return a fixed transcript line and never fail.
pub trait Countdown {
    /// Readiness report, emitted during facade initialization.
    fn ready(&self) -> String;

    /// Action report, emitted when the facade orders the launch.
    fn go(&self) -> String;
}

/// The launcher side of the launch sequence.
pub trait Launcher {
    /// Readiness report, emitted during facade initialization.
    fn get_ready(&self) -> String;

    /// Action report, emitted when the facade orders the launch.
    fn fire(&self) -> String;
}
