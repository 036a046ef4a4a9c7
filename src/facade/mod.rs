//! The facade layer.
//!
//! [`Facade`] provides the simple interface to the subsystems and manages their
//! lifecycle. Clients working through it never see the individual subsystem
//! calls, only the composite transcript.

mod builder;

pub use builder::FacadeBuilder;

use tracing::trace;

use crate::subsystem::{Countdown, Launcher, SubsystemA, SubsystemB};

/// Owns one countdown and one launcher subsystem and exposes a single composite
/// operation over them.
///
/// Construction consumes the subsystems: the facade is their sole owner from that
/// point on, and dropping it releases both exactly once. The generic parameters
/// default to the concrete subsystems, so ordinary callers write plain `Facade`.
#[derive(Debug)]
pub struct Facade<A = SubsystemA, B = SubsystemB>
where
    A: Countdown,
    B: Launcher,
{
    subsystem_a: A,
    subsystem_b: B,
}

impl Facade {
    /// Start a builder; any slot left unset is default-constructed at build time.
    pub fn builder() -> FacadeBuilder {
        FacadeBuilder::new()
    }
}

impl Default for Facade {
    fn default() -> Self {
        Self::new(SubsystemA, SubsystemB)
    }
}

impl<A, B> Facade<A, B>
where
    A: Countdown,
    B: Launcher,
{
    /// Take exclusive ownership of both subsystems.
    pub fn new(subsystem_a: A, subsystem_b: B) -> Self {
        Self {
            subsystem_a,
            subsystem_b,
        }
    }

    /// Run the full launch sequence and return the transcript.
    ///
    /// Delegation order is fixed: both subsystems report readiness before either
    /// acts. The result is identical on every call; the subsystems hold no state.
    pub fn operation(&self) -> String {
        let mut result = String::from("Facade initializes subsystems:\n");
        trace!("delegating readiness checks");
        result.push_str(&self.subsystem_a.ready());
        result.push_str(&self.subsystem_b.get_ready());
        result.push_str("Facade orders subsystems to perform the action:\n");
        trace!("delegating launch orders");
        result.push_str(&self.subsystem_a.go());
        result.push_str(&self.subsystem_b.fire());
        result
    }

    /// Transfer ownership of both subsystems back to the caller.
    ///
    /// The facade is consumed without releasing either subsystem; the caller is
    /// once again responsible for them.
    pub fn into_parts(self) -> (A, B) {
        (self.subsystem_a, self.subsystem_b)
    }
}
