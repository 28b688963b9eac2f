use crate::badge::font::DEFAULT_FONT_PATH;
#[cfg(feature = "config")]
use crate::error::Result;
#[cfg(feature = "config")]
use serde::Deserialize;
use std::path::PathBuf;
#[cfg(feature = "config")]
use std::{fs, io, path::Path};

/// Read from the working directory when present.
pub const SETTINGS_FILE: &str = "badgeforge.toml";

/// Where icons are written and which font draws them. The icon list itself is fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Settings {
    pub base_dir: PathBuf,
    pub font_path: PathBuf,
    pub font_index: u32,
    /// Only known to builds with the `log` feature; elsewhere the key is rejected.
    #[cfg(feature = "log")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_dir: PathBuf::from("."),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_index: 0,
            #[cfg(feature = "log")]
            log_file: None,
        }
    }
}

#[cfg(feature = "config")]
impl Settings {
    pub fn from_toml(text: &str) -> Result<Settings> {
        Ok(toml_dep::from_str(text)?)
    }

    /// Defaults if `path` doesn't exist; a file that exists but doesn't parse is an error.
    pub fn load(path: &Path) -> Result<Settings> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => Err(err.into()),
        }
    }
}
