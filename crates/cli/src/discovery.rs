// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where verbosity settings come from.
//!
//! An explicit `-C` path wins. Otherwise the nearest printutils.toml between
//! the working directory and the git root is used, and without one the
//! printer stays quiet.

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "printutils.toml";

/// Origin of the settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named with `-C`/`PRINTUTILS_CONFIG`.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No file; verbosity is off unless overridden.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    /// Read the settings this source points at.
    pub fn load(&self) -> Result<Config> {
        match self.path() {
            Some(path) => config::load(path),
            None => Ok(Config::default()),
        }
    }
}

/// Nearest printutils.toml from `start_dir` up to (and including) the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Decide which config applies, validating an explicit path up front.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    let Some(path) = explicit else {
        let source = find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered);
        tracing::debug!(cwd = %cwd.display(), source = ?source, "config discovery");
        return Ok(source);
    };

    if path.is_file() {
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }

    let message = if path.is_dir() {
        format!("config path is a directory: {}", path.display())
    } else {
        format!("config file not found: {}", path.display())
    };
    Err(Error::Config {
        message,
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
