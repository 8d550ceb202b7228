//! File System Utilities
//!
//! Platform directories for settings and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("cl", "aula", "aula-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/aula-gui/` or `$XDG_CONFIG_HOME/aula-gui/`
/// - **macOS**: `~/Library/Application Support/cl.aula.aula-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\aula\aula-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory holding rolling log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/aula-gui/logs/`
/// - **macOS**: `~/Library/Application Support/cl.aula.aula-gui/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\aula\aula-gui\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let log_dir = project_dirs()?.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
