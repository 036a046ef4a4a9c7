use tracing::debug;

use crate::facade::Facade;
use crate::subsystem::{SubsystemA, SubsystemB};

/// Builder for a [`Facade`] with optionally supplied subsystems.
///
/// Keep this surface small and predictable: set a slot to hand over an existing
/// subsystem, leave it unset to have `build` construct the default. "Not
/// supplied" is an explicit `Option`, never a sentinel.
#[derive(Debug, Default)]
pub struct FacadeBuilder {
    subsystem_a: Option<SubsystemA>,
    subsystem_b: Option<SubsystemB>,
}

impl FacadeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand an existing countdown subsystem over to the facade.
    pub fn subsystem_a(mut self, subsystem: SubsystemA) -> Self {
        self.subsystem_a = Some(subsystem);
        self
    }

    /// Hand an existing launcher subsystem over to the facade.
    pub fn subsystem_b(mut self, subsystem: SubsystemB) -> Self {
        self.subsystem_b = Some(subsystem);
        self
    }

    /// Build the facade, default-constructing any subsystem the caller did not
    /// supply. Either way the facade ends up owning both slots.
    pub fn build(self) -> Facade {
        if self.subsystem_a.is_none() {
            debug!("no countdown subsystem supplied, constructing default");
        }
        if self.subsystem_b.is_none() {
            debug!("no launcher subsystem supplied, constructing default");
        }
        Facade::new(
            self.subsystem_a.unwrap_or_default(),
            self.subsystem_b.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaulted_and_supplied_slots_behave_identically() {
        let supplied = FacadeBuilder::new()
            .subsystem_a(SubsystemA)
            .subsystem_b(SubsystemB)
            .build();
        let defaulted = FacadeBuilder::new().build();
        let mixed = FacadeBuilder::new().subsystem_b(SubsystemB).build();

        assert_eq!(supplied.operation(), defaulted.operation());
        assert_eq!(supplied.operation(), mixed.operation());
    }
}
