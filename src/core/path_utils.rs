/*
 * Locates the per-user directories the browser keeps its state in (last
 * content root, settings, log file). Directories are created on first use.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

pub const APP_NAME: &str = "TutorialBrowser";

/*
 * Retrieves the application's local (non-roaming) configuration directory,
 * creating it if needed. Returns `None` if the platform offers no such
 * directory or it cannot be created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    log::trace!("PathUtils: Resolving config dir for '{app_name}'");
    let proj_dirs = ProjectDirs::from("", "", app_name)?;
    let config_path = proj_dirs.config_local_dir();
    if !config_path.exists() {
        if let Err(e) = fs::create_dir_all(config_path) {
            log::error!("PathUtils: Failed to create config directory {config_path:?}: {e}");
            return None;
        }
        log::debug!("PathUtils: Created config directory {config_path:?}");
    }
    Some(config_path.to_path_buf())
}

/* Full path of a named file inside the application's config directory. */
pub fn app_config_file(app_name: &str, file_name: &str) -> Option<PathBuf> {
    get_base_app_config_local_dir(app_name).map(|dir| dir.join(file_name))
}
