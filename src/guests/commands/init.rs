use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::GuestList;
use crate::store::GuestStore;

/// Writes an empty list (`[]`) unless the store already holds one.
pub fn run<S: GuestStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.exists() {
        let guests = store.load()?;
        result.add_message(CmdMessage::info(format!(
            "Guest list already exists ({} on the list)",
            guests.len()
        )));
        return Ok(result.with_guests(guests));
    }

    let guests = GuestList::new();
    store.save(&guests)?;
    result.add_message(CmdMessage::success("Initialized an empty guest list"));
    Ok(result.with_guests(guests))
}
