//! Persistent tool settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::json::JsonMode;
use crate::names::FileKind;

/// Tool settings that persist between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // JSON export
    pub json_mode: JsonMode,
    pub pretty_json: bool,

    // Forces the file kind instead of guessing from the extension
    pub file_kind: Option<FileKind>,

    // Loading
    pub use_mmap: bool,

    // Last opened file
    pub last_file: Option<PathBuf>,

    // Recent files (most recent first, max 10)
    pub recent_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            json_mode: JsonMode::StructuredPreferred,
            pretty_json: true,
            file_kind: None,
            use_mmap: cfg!(feature = "mmap"),
            last_file: None,
            recent_files: Vec::new(),
        }
    }
}

const MAX_RECENT_FILES: usize = 10;

impl Settings {
    /// Get settings file path
    #[cfg(feature = "cli")]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("w3d-tool");
            p.push("settings.json");
            p
        })
    }

    /// Without the platform directory lookup settings are never persisted
    #[cfg(not(feature = "cli"))]
    pub fn path() -> Option<PathBuf> {
        None
    }

    /// Load settings from the config dir, defaults on any failure
    pub fn load() -> Self {
        Self::path().map(Self::load_from).unwrap_or_default()
    }

    /// Load settings from `path`, defaults on any failure
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the config dir
    pub fn save(&self) {
        if let Some(path) = Self::path() {
            if let Err(e) = self.save_to(&path) {
                tracing::warn!("could not save settings to {}: {}", path.display(), e);
            }
        }
    }

    /// Save settings to `path` as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Add file to recent files list (moves to top if already present)
    pub fn add_recent(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path.clone());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self.last_file = Some(path);
    }

    /// JSON mode for one run; `hex_only` comes from the command line and
    /// leaves the persisted mode alone
    pub fn json_mode_for_run(&self, hex_only: bool) -> JsonMode {
        if hex_only {
            JsonMode::HexOnly
        } else {
            self.json_mode
        }
    }

    /// File kind for `path`, honoring the override
    pub fn file_kind_for(&self, path: impl AsRef<Path>) -> FileKind {
        self.file_kind.unwrap_or_else(|| FileKind::from_path(path))
    }
}
