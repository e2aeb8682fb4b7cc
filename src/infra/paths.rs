// src/infra/paths.rs — XDG-compliant path management
//
// All paths respect the WEATHERDECK_HOME environment variable for isolation.
// When WEATHERDECK_HOME is set, config and data live under that directory.
// When unset, config uses ~/.weatherdeck/ and data uses XDG_DATA_HOME/weatherdeck.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the WEATHERDECK_HOME override, if set.
fn weatherdeck_home() -> Option<PathBuf> {
    std::env::var_os("WEATHERDECK_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory when the platform
/// cannot report one (containers without a passwd entry).
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $WEATHERDECK_HOME/ or ~/.weatherdeck/
pub fn config_dir() -> PathBuf {
    if let Some(home) = weatherdeck_home() {
        return home;
    }
    dirs_home().join(".weatherdeck")
}

/// Data directory: $WEATHERDECK_HOME/data/ or ~/.local/share/weatherdeck/
pub fn data_dir() -> PathBuf {
    if let Some(home) = weatherdeck_home() {
        return home.join("data");
    }
    match ProjectDirs::from("", "", "weatherdeck") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Durable token slot
pub fn session_file_path() -> PathBuf {
    config_dir().join("session.json")
}

/// Log file used while the dashboard owns the terminal
pub fn log_file_path() -> PathBuf {
    data_dir().join("weatherdeck.log")
}

/// Ensure config and data directories exist
pub async fn ensure_dirs() -> anyhow::Result<()> {
    for dir in [config_dir(), data_dir()] {
        tokio::fs::create_dir_all(&dir).await?;
    }
    Ok(())
}
