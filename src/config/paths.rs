//! Where settings and the user reading dictionary live: one directory under
//! the platform config root (`dirs::config_dir`), e.g.
//! `~/.config/kanji-read-assist/` on Linux.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "kanji-read-assist";
const SETTINGS: &str = "settings.toml";
const READINGS: &str = "readings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    /// `settings.toml`
    pub settings_file: PathBuf,
    /// `readings.json`, see [`crate::romaji::ReadingDictionary`].
    pub readings_file: PathBuf,
}

impl AppPaths {
    /// Paths under the platform config root, or under `./` when the platform
    /// has none.
    pub fn new() -> Self {
        let root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::under(&root)
    }

    /// Paths for an application directory created inside `root`.
    pub fn under(root: &Path) -> Self {
        let config_dir = root.join(APP_DIR);
        Self {
            settings_file: config_dir.join(SETTINGS),
            readings_file: config_dir.join(READINGS),
            config_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
