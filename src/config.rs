use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

// Default configuration
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/query";
pub const DEFAULT_THEME: &str = "light";
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "BUBBLECHAT_ENDPOINT";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// URL the query is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// "light" or "dark"
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_window_size() -> [f32; 2] {
    DEFAULT_WINDOW_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            theme: default_theme(),
            window_size: default_window_size(),
        }
    }
}

impl Settings {
    /// Apply an endpoint override, ignoring blank values.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(ep) = endpoint.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) {
            self.endpoint = ep;
        }
        self
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "bubblechat", "bubblechat-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

/// Load settings from the platform config dir, then apply the environment override.
///
/// Missing or unreadable files fall back to defaults.
pub fn load_settings() -> Settings {
    let from_disk = settings_path().and_then(|p| read_settings(&p).ok());
    if from_disk.is_none() {
        tracing::debug!("no saved settings, using defaults");
    }
    from_disk
        .unwrap_or_default()
        .with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
}

pub fn read_settings(path: &Path) -> std::io::Result<Settings> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(std::io::Error::other)
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        write_settings(&path, settings)?;
    }
    Ok(())
}

pub fn write_settings(path: &Path, settings: &Settings) -> std::io::Result<()> {
    let data = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
