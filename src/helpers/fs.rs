//! File System Utilities
//!
//! Configuration directory management.

use crate::constants::CONFIG_FILE_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "goldwind", "mail-composer").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/mail-composer/` or `$XDG_CONFIG_HOME/mail-composer/`
/// - **macOS**: `~/Library/Application Support/com.goldwind.mail-composer/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\goldwind\mail-composer\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Path of `composer.toml` inside the configuration directory
///
/// The file itself is not created; a missing file means default settings.
pub fn get_config_file() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
