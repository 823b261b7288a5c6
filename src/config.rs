//! Diary configuration
//!
//! Settings come from an optional `config.toml` in the XDG config directory
//! (usually `~/.config/mkdiary/config.toml`):
//!
//! ```toml
//! base_dir = "/home/me/Documents/diary"
//! file_ext = ".md"
//! editor = "nvim"
//! ```
//!
//! A missing or unreadable file falls back to the defaults: `~/Diary` and
//! `.txt`, with no editor preference.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Directory holding the year/month/day tree of entries
    pub base_dir: PathBuf,
    /// Extension appended to entry files; must start with a dot
    pub file_ext: String,
    /// Editor command; when unset the binary falls back to $VISUAL / $EDITOR
    pub editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_dir: default_base_dir(),
            file_ext: ".txt".to_string(),
            editor: None,
        }
    }
}

fn default_base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Diary")
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults on any problem
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}
