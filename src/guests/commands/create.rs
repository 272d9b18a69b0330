use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::GuestStore;

/// Appends `name` to the stored list and writes the whole list back.
///
/// Duplicates are accepted; a warning message notes them.
pub fn run<S: GuestStore>(store: &mut S, name: String) -> Result<CmdResult> {
    let mut guests = store.load()?;
    let duplicate = guests.contains(&name);

    guests.push(name.clone());
    store.save(&guests)?;

    let mut result = CmdResult::default();
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "{} was already on the list",
            name
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Added {} ({} on the list)",
        name,
        guests.len()
    )));

    Ok(result.with_guests(guests).with_added(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{read, MessageLevel};
    use crate::error::GuestsError;
    use crate::model::GuestList;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_to_empty_list() {
        let mut store = InMemoryStore::with_guests(GuestList::new());
        let result = run(&mut store, "Mary".into()).unwrap();

        assert_eq!(result.added.as_deref(), Some("Mary"));
        assert_eq!(result.guests.names(), ["Mary"]);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn keeps_creation_order() {
        let mut store = InMemoryStore::with_guests(GuestList::new());
        run(&mut store, "Mary".into()).unwrap();
        run(&mut store, "Don".into()).unwrap();

        let listed = read::run(&store).unwrap();
        assert_eq!(listed.guests.names(), ["Mary", "Don"]);
    }

    #[test]
    fn keeps_duplicates_and_warns() {
        let mut store = InMemoryStore::with_guests(GuestList::new());
        run(&mut store, "Mary".into()).unwrap();
        let result = run(&mut store, "Mary".into()).unwrap();

        assert_eq!(result.guests.names(), ["Mary", "Mary"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn uninitialized_store_fails_without_writing() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Mary".into());

        assert!(matches!(result, Err(GuestsError::Io(_))));
        assert_eq!(store.writes(), 0);
        assert!(!store.exists());
    }
}
