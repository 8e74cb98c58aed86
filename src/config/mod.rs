use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

const CONFIG_DIR: &str = "charity_form";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for the form front-end. `preferred_currency` only
/// preselects the currency menu cursor; the stored default value stays empty
/// until the user chooses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_currency: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            preferred_currency: None,
        }
    }
}

impl Config {
    /// Platform config file location, if the platform exposes one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// or unreadable. A malformed file is logged, never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Saves the config through a temp file so a crash mid-write cannot
    /// leave a truncated config behind.
    pub fn save(&self, path: &Path) -> Result<(), FormError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
