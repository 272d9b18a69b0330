use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::GuestStore;

pub fn run<S: GuestStore>(store: &S) -> Result<CmdResult> {
    let guests = store.load()?;
    Ok(CmdResult::default().with_guests(guests))
}
