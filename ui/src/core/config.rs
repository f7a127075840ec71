//! Runtime configuration for the translator widget.
//!
//! Defaults target the public MyMemory endpoint with an English → Hindi pair.
//! Builds can override each field at compile time through environment
//! variables (works on wasm, where no process environment exists):
//!
//! - `POLYGLOT_ENDPOINT`
//! - `POLYGLOT_DEFAULT_SOURCE`
//! - `POLYGLOT_DEFAULT_TARGET`
//!
//! Native shells additionally layer a JSON file on top (see
//! [`TranslatorConfig::merge_file`]); fields missing from the file keep
//! their current values.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en-GB";
pub const DEFAULT_TARGET_LANGUAGE: &str = "hi-IN";

/// Runtime variable naming a JSON config file for native shells.
pub const CONFIG_FILE_ENV: &str = "POLYGLOT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid translator config: {0}")]
    Parse(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("cannot read translator config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Base URL of the translation endpoint (query string is appended).
    pub endpoint: String,
    pub default_source: String,
    pub default_target: String,
}

/// On-disk shape; every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    default_source: Option<String>,
    default_target: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_source: DEFAULT_SOURCE_LANGUAGE.to_string(),
            default_target: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Defaults with compile-time overrides applied.
    pub fn load() -> Self {
        Self::default().with_overrides(
            option_env!("POLYGLOT_ENDPOINT"),
            option_env!("POLYGLOT_DEFAULT_SOURCE"),
            option_env!("POLYGLOT_DEFAULT_TARGET"),
        )
    }

    /// Overlay the fields present in a JSON document.
    pub fn merge_json(self, raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(raw)?;
        Ok(self.with_overrides(
            file.endpoint.as_deref(),
            file.default_source.as_deref(),
            file.default_target.as_deref(),
        ))
    }

    /// Overlay the fields of a JSON config file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_json(&raw)
    }

    fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        source: Option<&str>,
        target: Option<&str>,
    ) -> Self {
        // Blank overrides are treated as unset.
        fn pick(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        if let Some(endpoint) = pick(endpoint) {
            self.endpoint = endpoint.to_string();
        }
        if let Some(source) = pick(source) {
            self.default_source = source.to_string();
        }
        if let Some(target) = pick(target) {
            self.default_target = target.to_string();
        }
        self
    }
}
