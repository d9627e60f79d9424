// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bootstrap settings for the process-wide default LM.
//!
//! The application loads these once at startup and installs the configured
//! default before the first resolution:
//!
//! ```toml
//! [default_lm]
//! model = "qwen2.5-0.5b"
//! provider = "local"
//! ```

use crate::client::StaticLm;
use crate::error::SettingsError;
use crate::registry::set_default_lm;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_provider() -> String {
    "local".to_string()
}

/// Top-level settings file contents.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeSettings {
    /// Default LM installed at bootstrap, if present.
    #[serde(default)]
    pub default_lm: Option<DefaultLmConfig>,
}

/// `[default_lm]` table.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultLmConfig {
    /// Model identifier.
    pub model: String,

    /// Provider label (default: "local").
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl ScopeSettings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Install the configured default LM, if any.
    ///
    /// Returns whether a default was installed. A missing `[default_lm]`
    /// table leaves the current global default untouched.
    pub fn install(&self) -> bool {
        match &self.default_lm {
            Some(config) => {
                set_default_lm(StaticLm::handle(&config.model, &config.provider));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
