/*
 * Key-value persistence for UI state that should survive restarts, such as
 * which folders are expanded in the navigation tree and the zoom level.
 * Values are plain strings; callers that need structure encode it themselves
 * (the expanded-folder set is stored as a JSON array).
 *
 * `CoreSettingsStore` keeps everything in one flat JSON object on disk and
 * writes it through on every `set`. A missing or unreadable file starts the
 * store empty rather than failing, since losing UI preferences is harmless.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const SETTINGS_FILENAME: &str = "settings.json";
pub const EXPANDED_FOLDERS_KEY: &str = "expanded_folders";
pub const ZOOM_PERCENT_KEY: &str = "zoom_percent";

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoProjectDirectory,
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Serde(err)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsError::Serde(e) => write!(f, "Settings serialization error: {e}"),
            SettingsError::NoProjectDirectory => {
                write!(f, "Could not determine the settings directory")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

pub trait SettingsStoreOperations: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

pub struct CoreSettingsStore {
    file_path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl CoreSettingsStore {
    /* Opens the store in the per-user config directory for `app_name`. */
    pub fn open(app_name: &str) -> Result<Self> {
        let file_path = path_utils::app_config_file(app_name, SETTINGS_FILENAME)
            .ok_or(SettingsError::NoProjectDirectory)?;
        Ok(Self::open_at(file_path))
    }

    pub fn open_at(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let values = match load_values(&file_path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("SettingsStore: Ignoring unreadable settings {file_path:?}: {e}");
                BTreeMap::new()
            }
        };
        log::debug!(
            "SettingsStore: Loaded {} values from {:?}",
            values.len(),
            file_path
        );
        CoreSettingsStore {
            file_path,
            values: Mutex::new(values),
        }
    }
}

fn load_values(file_path: &Path) -> Result<BTreeMap<String, String>> {
    if !file_path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(file_path)?;
    let file: SettingsFile = serde_json::from_str(&contents)?;
    Ok(file.values)
}

impl SettingsStoreOperations for CoreSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.lock() {
            Ok(values) => values.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.values.lock() {
            Ok(values) => values,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.to_string(), value.to_string());

        let file = SettingsFile {
            values: values.clone(),
        };
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, serde_json::to_string_pretty(&file)?)?;
        log::trace!("SettingsStore: Saved '{key}' to {:?}", self.file_path);
        Ok(())
    }
}
