// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbosity configuration.
//!
//! Handles printutils.toml parsing with version validation and unknown key
//! warnings. Only a numeric `verbose = 1` turns status output on.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// The single level that enables output.
pub const ENABLED_LEVEL: i64 = 1;

/// Whether status lines are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawVerbose")]
pub enum Verbosity {
    Enabled,
    #[default]
    Disabled,
}

impl Verbosity {
    /// Map an integer level. Exactly [`ENABLED_LEVEL`] enables output.
    pub fn from_level(level: i64) -> Self {
        if level == ENABLED_LEVEL {
            Verbosity::Enabled
        } else {
            Verbosity::Disabled
        }
    }

    /// Map a boolean flag with the usual meaning.
    pub fn enabled_if(flag: bool) -> Self {
        if flag {
            Verbosity::Enabled
        } else {
            Verbosity::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Verbosity::Enabled
    }
}

impl From<i64> for Verbosity {
    fn from(level: i64) -> Self {
        Verbosity::from_level(level)
    }
}

/// Accepted TOML shapes for `verbose`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVerbose {
    Level(i64),
    Flag(bool),
    Real(f64),
}

impl From<RawVerbose> for Verbosity {
    fn from(raw: RawVerbose) -> Self {
        match raw {
            RawVerbose::Level(level) => Verbosity::from_level(level),
            // Booleans are not the integer 1, so `verbose = true` stays quiet.
            RawVerbose::Flag(_) => Verbosity::Disabled,
            RawVerbose::Real(level) if level == ENABLED_LEVEL as f64 => Verbosity::Enabled,
            RawVerbose::Real(_) => Verbosity::Disabled,
        }
    }
}

/// Settings read by the status printer on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub verbose: Verbosity,
}

impl Config {
    pub fn new(verbose: impl Into<Verbosity>) -> Self {
        Self {
            verbose: verbose.into(),
        }
    }

    /// Replace the verbosity when a level was given explicitly.
    pub fn with_level(self, level: Option<i64>) -> Self {
        match level {
            Some(level) => Self::new(level),
            None => self,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.is_enabled()
    }
}

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// On-disk layout, capturing unknown keys for warnings.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    verbose: Verbosity,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let file: ConfigFile = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in file.unknown.keys().filter(|k| k.as_str() != "version") {
        warn_unknown_key(path, key);
    }

    tracing::debug!(path = %path.display(), verbose = ?file.verbose, "loaded config");

    Ok(Config {
        verbose: file.verbose,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "printutils: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
