use crate::error::{GuestsError, Result};
use crate::store::fs::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings, read from a JSON file passed with `--config`.
///
/// ```json
/// { "data_file": "party/guests.json", "pretty": true }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuestsConfig {
    /// Guest list location. Relative paths resolve against the config file's
    /// directory.
    pub data_file: Option<PathBuf>,

    /// Write the list as indented JSON instead of a single line
    pub pretty: bool,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl GuestsConfig {
    /// Load config from the given file. A missing file is an error: the
    /// caller asked for it explicitly.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(GuestsError::Io)?;
        let mut config: GuestsConfig =
            serde_json::from_str(&content).map_err(GuestsError::Serialization)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Picks the guest file: explicit override, then `data_file`, then
    /// `guests.json` next to the running executable.
    pub fn resolve_data_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }

        if let Some(data_file) = &self.data_file {
            return Ok(match &self.base_dir {
                Some(base) if data_file.is_relative() => base.join(data_file),
                _ => data_file.clone(),
            });
        }

        default_data_file()
    }
}

fn default_data_file() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(GuestsError::Io)?;
    let dir = exe.parent().ok_or_else(|| {
        GuestsError::Config(format!(
            "cannot locate a directory for {} next to {}",
            DEFAULT_FILENAME,
            exe.display()
        ))
    })?;
    Ok(dir.join(DEFAULT_FILENAME))
}
