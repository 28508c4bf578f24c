use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{Settings, DEFAULT_DATABASE_FILE};

pub const ENV_DATABASE: &str = "TIMELINE_TABLE_DATABASE";
pub const ENV_BIND: &str = "TIMELINE_TABLE_BIND";
pub const ENV_API_URL: &str = "TIMELINE_TABLE_API_URL";
pub const ENV_DEBOUNCE_MS: &str = "TIMELINE_TABLE_DEBOUNCE_MS";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads [`Settings`] from a TOML file plus environment overrides.
pub struct SettingsService {
    config_path: PathBuf,
    data_dir: Option<PathBuf>,
}

impl SettingsService {
    /// Use an explicit config file. Relative database paths stay relative to
    /// the working directory.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            data_dir: None,
        }
    }

    /// Use the platform config directory, placing the default database in the
    /// platform data directory.
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "Ken24T", "TimelineTable")
            .ok_or_else(|| anyhow!("Could not determine a home directory for configuration"))?;

        Ok(Self {
            config_path: dirs.config_dir().join(CONFIG_FILE_NAME),
            data_dir: Some(dirs.data_dir().to_path_buf()),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Read the config file (defaults when it does not exist), apply
    /// environment overrides and validate the result.
    pub fn load(&self) -> Result<Settings> {
        let mut settings = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path).with_context(|| {
                format!("Failed to read config file {}", self.config_path.display())
            })?;
            toml::from_str::<Settings>(&content).with_context(|| {
                format!("Failed to parse config file {}", self.config_path.display())
            })?
        } else {
            log::info!(
                "No config file at {}, using defaults",
                self.config_path.display()
            );
            Settings::default()
        };

        if let Some(data_dir) = &self.data_dir {
            if settings.server.database_path == DEFAULT_DATABASE_FILE {
                settings.server.database_path = data_dir
                    .join(DEFAULT_DATABASE_FILE)
                    .to_string_lossy()
                    .to_string();
            }
        }

        apply_overrides(&mut settings, |key| std::env::var(key).ok())?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Write settings back as TOML, creating the parent directory.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.config_path, content).with_context(|| {
            format!("Failed to write config file {}", self.config_path.display())
        })?;
        Ok(())
    }
}

/// Apply overrides from a key lookup (the process environment in practice).
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(ENV_DATABASE) {
        settings.server.database_path = path;
    }

    if let Some(bind) = lookup(ENV_BIND) {
        settings.server.bind_address = bind;
    }

    if let Some(url) = lookup(ENV_API_URL) {
        settings.client.api_base_url = url;
    }

    if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
        settings.client.debounce_ms = raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a whole number of milliseconds", ENV_DEBOUNCE_MS))?;
    }

    Ok(())
}
