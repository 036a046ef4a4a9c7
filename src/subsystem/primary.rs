use crate::subsystem::Countdown;

/// The countdown subsystem.
///
/// Stateless and always constructible. Deliberately neither `Clone` nor `Copy`:
/// a facade takes exclusive ownership of the instance it is given.
#[derive(Debug, Default)]
pub struct SubsystemA;

impl Countdown for SubsystemA {
    fn ready(&self) -> String {
        "Subsystem1: Ready!\n".to_string()
    }

    fn go(&self) -> String {
        "Subsystem1: Go!\n".to_string()
    }
}
