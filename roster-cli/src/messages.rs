use roster_core::{AddError, ClearError, ExportError, PickError, RemoveError, RosterError};
use std::path::Path;

/// User-facing wording for a rejected roster operation
pub fn describe(err: &RosterError) -> String {
    match err {
        RosterError::Add(AddError::EmptyName) => "Please enter a valid name!".to_string(),
        RosterError::Add(AddError::DuplicateName(name)) => {
            format!("{} is already on the list! Try another name.", name)
        }
        RosterError::Remove(RemoveError::IndexOutOfRange { index, len }) => format!(
            "There is no participant #{} (the list has {}).",
            index + 1,
            len
        ),
        RosterError::Clear(ClearError::AlreadyEmpty) => "The list is already empty!".to_string(),
        RosterError::Pick(PickError::NotEnoughParticipants { size: 0 }) => {
            "Add at least one participant before drawing!".to_string()
        }
        RosterError::Pick(PickError::NotEnoughParticipants { .. }) => {
            "You need at least two participants to draw!".to_string()
        }
        RosterError::Export(ExportError::EmptyRoster) => {
            "There are no names on the list to export!".to_string()
        }
    }
}

pub fn added(name: &str) -> String {
    format!("{} was added.", name)
}

pub fn removed(name: &str) -> String {
    format!("{} was removed from the list.", name)
}

pub fn cleared(count: usize) -> String {
    format!("List cleared ({} removed).", count)
}

pub fn exported(path: &Path) -> String {
    format!("List exported to {}.", path.display())
}

pub fn drawn(name: &str) -> String {
    format!("Congratulations! {} was drawn!", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_errors_distinguish_empty_from_single() {
        let none = describe(&PickError::NotEnoughParticipants { size: 0 }.into());
        let one = describe(&PickError::NotEnoughParticipants { size: 1 }.into());
        assert!(none.contains("at least one"));
        assert!(one.contains("at least two"));
    }

    #[test]
    fn duplicate_names_the_participant() {
        let msg = describe(&AddError::DuplicateName("Ana".to_string()).into());
        assert!(msg.starts_with("Ana is already on the list"));
    }

    #[test]
    fn out_of_range_is_one_based() {
        let msg = describe(&RemoveError::IndexOutOfRange { index: 3, len: 2 }.into());
        assert_eq!(msg, "There is no participant #4 (the list has 2).");
    }

    #[test]
    fn success_messages() {
        assert_eq!(added("Ana"), "Ana was added.");
        assert_eq!(removed("Beto"), "Beto was removed from the list.");
        assert_eq!(cleared(3), "List cleared (3 removed).");
        assert_eq!(
            exported(Path::new("out/roster.txt")),
            "List exported to out/roster.txt."
        );
    }
}
