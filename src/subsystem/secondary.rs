use crate::subsystem::Launcher;

/// The launcher subsystem. Stateless; exclusive ownership, like [`SubsystemA`].
///
/// [`SubsystemA`]: crate::subsystem::SubsystemA
#[derive(Debug, Default)]
pub struct SubsystemB;

impl Launcher for SubsystemB {
    fn get_ready(&self) -> String {
        "Subsystem2: Get ready!\n".to_string()
    }

    fn fire(&self) -> String {
        "Subsystem2: Fire!\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_lines_are_fixed() {
        let b = SubsystemB;
        assert_eq!(b.get_ready(), "Subsystem2: Get ready!\n");
        assert_eq!(b.fire(), "Subsystem2: Fire!\n");
    }
}
