use super::GuestStore;
use crate::error::{GuestsError, Result};
use crate::model::GuestList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_FILENAME: &str = "guests.json";

pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GuestStore for FileStore {
    fn load(&self) -> Result<GuestList> {
        debug!(path = %self.path.display(), "loading guest list");
        let content = fs::read_to_string(&self.path).map_err(GuestsError::Io)?;
        let guests: GuestList =
            serde_json::from_str(&content).map_err(GuestsError::Serialization)?;
        debug!(count = guests.len(), "loaded guest list");
        Ok(guests)
    }

    fn save(&mut self, guests: &GuestList) -> Result<()> {
        let content = if self.pretty {
            serde_json::to_string_pretty(guests)
        } else {
            serde_json::to_string(guests)
        }
        .map_err(GuestsError::Serialization)?;

        // Whole-file overwrite, no temp file or rename
        fs::write(&self.path, content).map_err(GuestsError::Io)?;
        debug!(path = %self.path.display(), count = guests.len(), "saved guest list");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
