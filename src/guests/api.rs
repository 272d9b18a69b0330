//! # API Facade
//!
//! The single entry point for guest list operations, whatever the UI. It
//! dispatches to `commands/*.rs` and returns their `CmdResult` untouched.
//!
//! `GuestsApi<S: GuestStore>` is generic over the storage backend:
//! - Production: `GuestsApi<FileStore>`
//! - Testing: `GuestsApi<InMemoryStore>`
//!
//! No business logic, no printing, no process exits here.

use crate::commands;
use crate::error::Result;
use crate::store::GuestStore;

pub struct GuestsApi<S: GuestStore> {
    store: S,
}

impl<S: GuestStore> GuestsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn read(&self) -> Result<commands::CmdResult> {
        commands::read::run(&self.store)
    }

    pub fn create(&mut self, name: impl Into<String>) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, name.into())
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
