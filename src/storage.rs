//! Keyed JSON document store.
//!
//! Each key maps to one JSON file inside the application data directory.
//! Writes are whole-document. `load_or_default` is the startup path: a
//! missing, unreadable, or corrupt document logs a warning and yields the
//! default instead of aborting, while `load` keeps the structured error for
//! callers that want to distinguish failure kinds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::desk::LayoutSnapshot;
use crate::error::{Error, Result};
use crate::settings::Settings;

pub const LAYOUT_KEY: &str = "layout";
pub const SETTINGS_KEY: &str = "settings";
pub const CHARACTERS_KEY: &str = "characters";

#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Platform default: `<data dir>/gm-desk`.
    pub fn open_default() -> Result<Self> {
        let base = dirs::data_dir().ok_or(Error::NoDataDir)?;
        Self::open(base.join("gm-desk"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).map_err(|err| Error::storage(key, err.to_string()))?;
        tracing::debug!(key, path = %path.display(), "saved document");
        Ok(())
    }

    /// Load a document; `Ok(None)` when the key has never been written.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::storage(key, err.to_string())),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Startup loader: any failure falls back to the default.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to load document; using defaults");
                T::default()
            }
        }
    }
}

/// Settings export/import bundle: the settings blob with an embedded copy of
/// the layout snapshot, written as one standalone JSON file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExportBundle {
    pub settings: Settings,
    pub layout: LayoutSnapshot,
}

impl ExportBundle {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
