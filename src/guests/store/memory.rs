use super::GuestStore;
use crate::error::{GuestsError, Result};
use crate::model::GuestList;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    guests: Option<GuestList>,
    writes: usize,
}

impl InMemoryStore {
    /// An uninitialized store: `load` fails until something is saved.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guests(guests: GuestList) -> Self {
        Self {
            guests: Some(guests),
            writes: 0,
        }
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl GuestStore for InMemoryStore {
    fn load(&self) -> Result<GuestList> {
        self.guests.clone().ok_or_else(|| {
            GuestsError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "guest list has not been initialized",
            ))
        })
    }

    fn save(&mut self, guests: &GuestList) -> Result<()> {
        self.guests = Some(guests.clone());
        self.writes += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.guests.is_some()
    }
}
