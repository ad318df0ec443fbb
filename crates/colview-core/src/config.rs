// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves view settings and bookmarks from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Bookmarks, Perspective};

/// Options consumed by the browser view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Layout strategy name ("miller", "dual" or "long")
    pub perspective: String,

    /// Relative column widths for the miller perspective
    pub column_ratios: Vec<f64>,

    /// Preview the contents of directories
    pub preview_directories: bool,

    /// Preview the contents of files
    pub preview_files: bool,

    /// Draw frame lines around the columns
    pub draw_borders: bool,

    /// Close off the bookmark listing with a frame
    pub draw_bookmark_borders: bool,

    /// List bookmarks pointing into hidden directories
    pub show_hidden_bookmarks: bool,

    /// Shrink the last column when it has nothing to preview
    pub collapse_preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            perspective: Perspective::default().name().to_string(),
            column_ratios: vec![1.0, 3.0, 4.0],
            preview_directories: true,
            preview_files: true,
            draw_borders: false,
            draw_bookmark_borders: true,
            show_hidden_bookmarks: true,
            collapse_preview: true,
        }
    }
}

impl Settings {
    /// Configured perspective, with unknown names mapped to the default
    pub fn perspective(&self) -> Perspective {
        Perspective::from_name_or_default(&self.perspective)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View options
    pub settings: Settings,

    /// Saved locations shown by the bookmark overlay
    pub bookmarks: Bookmarks,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/colview/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colview").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
