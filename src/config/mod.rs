use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_MAX_PHOTO_SIDE: u32 = 800;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Peak catalog CSV (read only)
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Progress CSV (the only file the tool writes to)
    #[serde(default = "default_progress")]
    pub progress: String,
    #[serde(default = "default_photos_dir")]
    pub photos_dir: String,
    /// Longest side of stored photos, in pixels
    #[serde(default = "default_max_photo_side")]
    pub max_photo_side: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_catalog() -> String {
    Config::config_dir()
        .join("welsh_100.csv")
        .to_string_lossy()
        .to_string()
}
fn default_progress() -> String {
    Config::config_dir()
        .join("my_progress.csv")
        .to_string_lossy()
        .to_string()
}
fn default_photos_dir() -> String {
    Config::config_dir()
        .join("photos")
        .to_string_lossy()
        .to_string()
}
fn default_max_photo_side() -> u32 {
    DEFAULT_MAX_PHOTO_SIDE
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            progress: default_progress(),
            photos_dir: default_photos_dir(),
            max_photo_side: default_max_photo_side(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rpeaklog)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rpeaklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpeaklog.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from an older file fall back to their defaults.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            if cfg.max_photo_side == 0 {
                return Err(AppError::Config(format!(
                    "max_photo_side must be at least 1 in {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "configuration loaded");
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        expand_tilde(&self.catalog)
    }

    pub fn progress_path(&self) -> PathBuf {
        expand_tilde(&self.progress)
    }

    pub fn photos_path(&self) -> PathBuf {
        expand_tilde(&self.photos_dir)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize the configuration directory, the config file and the
    /// photo directory. With `is_test` the config file is left alone.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        fs::create_dir_all(self.photos_path())?;
        Ok(())
    }
}
