//! # Storage Layer
//!
//! The [`GuestStore`] trait is the repository for the guest list. It deals in
//! whole lists only: `load` returns everything, `save` replaces everything.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file holding an array of
//!   strings (`guests.json` by default)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Failure semantics
//!
//! `load` on a store that has never been written is an error in both
//! implementations. There is no fallback to an empty list; initialization is
//! an explicit step (see [`crate::commands::init`]).

use crate::error::Result;
use crate::model::GuestList;

pub mod fs;
pub mod memory;

/// Abstract interface for guest list storage.
pub trait GuestStore {
    /// Load the full guest list
    fn load(&self) -> Result<GuestList>;

    /// Replace the stored list with `guests`
    fn save(&mut self, guests: &GuestList) -> Result<()>;

    /// Whether the store currently holds anything
    fn exists(&self) -> bool;
}
