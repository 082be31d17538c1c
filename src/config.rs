use crate::catalog::Catalog;
use crate::error::{HuddleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".huddle.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HuddleConfig {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_path() -> String {
    ".huddle".to_string()
}

fn default_id_prefix() -> String {
    "n-".to_string()
}

fn default_id_length() -> usize {
    5
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            id_prefix: default_id_prefix(),
            id_length: default_id_length(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file relative to the project root. Built-in sample when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level for huddle's own events when neither `RUST_LOG` nor `--verbose` is set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write JSON logs to `<data>/logs/huddle.log`, rotated daily.
    #[serde(default)]
    pub file: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
        }
    }
}

impl HuddleConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let config = Self::load_file(&config_path)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| HuddleError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn load_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: HuddleConfig = toml::from_str(&content)?;
        if config.session.id_length == 0 {
            return Err(HuddleError::Config(
                "session.id_length must be at least 1".to_string(),
            ));
        }
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(HuddleError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.session.path)
    }

    /// Loads the configured catalog, or the built-in sample.
    pub fn catalog(&self, project_root: &Path) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load(&project_root.join(path)),
            None => Ok(Catalog::sample()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
