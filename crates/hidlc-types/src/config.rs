// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Emission configuration.
//!
//! Names the generated-code symbols the emitters splice into their output.
//! Supports both programmatic and file-based configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Symbols and formatting used by the code emitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Local variable that receives each parcel call's status.
    #[serde(default = "default_status_var")]
    pub status_var: String,

    /// Status value meaning success.
    #[serde(default = "default_ok_status")]
    pub ok_status: String,

    /// Label jumped to by `ErrorMode::Goto`.
    #[serde(default = "default_error_label")]
    pub error_label: String,

    /// Indentation unit for one nesting level.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_status_var() -> String {
    "_hidl_err".to_string()
}

fn default_ok_status() -> String {
    "::android::OK".to_string()
}

fn default_error_label() -> String {
    "_hidl_error".to_string()
}

fn default_indent() -> String {
    "    ".to_string()
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            status_var: default_status_var(),
            ok_status: default_ok_status(),
            error_label: default_error_label(),
            indent: default_indent(),
        }
    }
}

impl EmitConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_identifier(&self.status_var) {
            return Err(ConfigError::Invalid(format!(
                "status_var `{}` is not an identifier",
                self.status_var
            )));
        }
        if !is_identifier(&self.error_label) {
            return Err(ConfigError::Invalid(format!(
                "error_label `{}` is not an identifier",
                self.error_label
            )));
        }
        if self.ok_status.trim().is_empty() {
            return Err(ConfigError::Invalid("ok_status is empty".into()));
        }
        if self.indent.is_empty() || self.indent.chars().any(|c| c != ' ' && c != '\t') {
            return Err(ConfigError::Invalid(
                "indent must be a non-empty run of spaces or tabs".into(),
            ));
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
