/*
 * Remembers which content directory the browser last opened, so it can be
 * reopened on the next start without arguments. The value is a single path
 * stored as text in the per-user config directory.
 *
 * Storage sits behind `ConfigManagerOperations` so the presenter and tests can
 * substitute their own implementation; `CoreConfigManager` is the file-backed
 * one.
 */
use crate::core::path_utils;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const LAST_CONTENT_ROOT_FILENAME: &str = "last_content_root.txt";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    NoProjectDirectory,
    Utf8Error(std::string::FromUtf8Error),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for ConfigError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ConfigError::Utf8Error(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine the configuration directory")
            }
            ConfigError::Utf8Error(e) => write!(f, "Configuration file UTF-8 error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Utf8Error(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub trait ConfigManagerOperations: Send + Sync {
    fn load_last_content_root(&self, app_name: &str) -> Result<Option<PathBuf>>;
    fn save_last_content_root(&self, app_name: &str, content_root: Option<&Path>) -> Result<()>;
}

/*
 * File-backed configuration. `config_dir_override` pins the directory;
 * otherwise the per-user config directory for `app_name` is used.
 */
pub struct CoreConfigManager {
    config_dir_override: Option<PathBuf>,
}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {
            config_dir_override: None,
        }
    }

    fn config_dir(&self, app_name: &str) -> Result<PathBuf> {
        match &self.config_dir_override {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Ok(dir.clone())
            }
            None => path_utils::get_base_app_config_local_dir(app_name)
                .ok_or(ConfigError::NoProjectDirectory),
        }
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Reads `last_content_root.txt`. A missing or blank file means no content
     * root has been remembered yet.
     */
    fn load_last_content_root(&self, app_name: &str) -> Result<Option<PathBuf>> {
        let file_path = self.config_dir(app_name)?.join(LAST_CONTENT_ROOT_FILENAME);
        if !file_path.exists() {
            log::debug!("CoreConfigManager: {file_path:?} does not exist.");
            return Ok(None);
        }

        let contents = String::from_utf8(fs::read(&file_path)?)?;
        let path_text = contents.trim();
        if path_text.is_empty() {
            log::debug!("CoreConfigManager: {file_path:?} is empty.");
            return Ok(None);
        }
        log::debug!("CoreConfigManager: Loaded last content root '{path_text}'.");
        Ok(Some(PathBuf::from(path_text)))
    }

    /* Writes the content root; `None` clears the stored value. */
    fn save_last_content_root(&self, app_name: &str, content_root: Option<&Path>) -> Result<()> {
        let file_path = self.config_dir(app_name)?.join(LAST_CONTENT_ROOT_FILENAME);
        let text = content_root
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(&file_path, text)?;
        log::debug!("CoreConfigManager: Saved last content root {content_root:?} to {file_path:?}.");
        Ok(())
    }
}
