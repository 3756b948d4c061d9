//! Configuration for the AAC core and its host binaries.
//!
//! Every section defaults independently, so a config file only needs the keys
//! it wants to change. A missing file means all defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "aahil-aac";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AacConfig {
    pub vocabulary: VocabularyConfig,
    pub speech: SpeechConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Vocabulary conventions the state machine relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Context label that adds no token to the sentence.
    pub placeholder_label: String,
    /// Context key that opens the suggested-choice picker.
    pub choice_context_key: String,
    /// Sentence head used when a choice is made on an empty sentence.
    pub default_head: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            placeholder_label: crate::core::resolver::PLACEHOLDER_LABEL.to_string(),
            choice_context_key: "aahils_choice".to_string(),
            default_head: "I want".to_string(),
        }
    }
}

/// Utterance settings handed to the speech sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Speaking rate, 1.0 is the engine's normal speed.
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 0.95,
            pitch: 1.0,
        }
    }
}

/// Persistence keys and locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub document_key: String,
    pub favorites_key: String,
    pub export_file_name: String,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_key: "aahil_aac_model".to_string(),
            favorites_key: "aahil_aac_favs".to_string(),
            export_file_name: crate::document::EXPORT_FILE_NAME.to_string(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `aac_core=debug`.
    pub level: String,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_name: "aahil_aac.log".to_string(),
        }
    }
}

impl AacConfig {
    /// Loads a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads from the platform config directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&default_config_path())
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Directory holding the persisted records and logs.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .or_else(dirs::home_dir)
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(APP_DIR))
        })
    }
}

/// `config_dir()/aahil-aac/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
        .join(CONFIG_FILE)
}
