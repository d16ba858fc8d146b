// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and validation.
//!
//! ```toml
//! version = 1
//!
//! [enforcement]
//! timing = "warn"
//! hermeticity = "strict"
//! distribution = "warn"
//!
//! [distribution]
//! small = { min = 0.70 }
//! large = { max = "10%" }
//! ```
//!
//! Everything is validated up front by [`Config::policy`]; a malformed mode
//! or bound fails before any test result is looked at.

pub mod defaults;
mod distribution;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::Error;
use crate::mode::{DomainModes, ModeSettings};
use crate::policy::Policy;

pub use distribution::{Bound, RangeConfig};

/// Parsed `tiercheck.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: u32,

    /// Mode string per policy domain.
    #[serde(default)]
    pub enforcement: ModeSettings,

    /// Proportion bounds keyed by tier name.
    #[serde(default)]
    pub distribution: BTreeMap<String, RangeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            enforcement: ModeSettings::default(),
            distribution: BTreeMap::new(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        defaults::CONFIG_VERSION
    }

    /// Resolve modes and constraints into the policy for a run.
    pub fn policy(&self) -> Result<Policy, Error> {
        let modes = DomainModes::resolve(&self.enforcement)?;
        let constraints = distribution::resolve_constraints(&self.distribution)?;
        Ok(Policy::new(modes, constraints))
    }
}

/// Parse config content. `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config, Error> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::Parse { path: path.to_path_buf(), message: e.to_string() })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(Error::Parse {
            path: path.to_path_buf(),
            message: format!(
                "unsupported config version {} (expected {})",
                config.version,
                defaults::CONFIG_VERSION
            ),
        });
    }
    Ok(config)
}

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the explicit config file, or the one discovered from `start_dir`.
///
/// Without either, enforcement runs with defaults: every domain off and no
/// distribution constraints. Returns the path the config came from, if any.
pub fn find_and_load(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(start_dir.join(path)),
        None => crate::discovery::find_config(start_dir),
    };
    match path {
        Some(path) => Ok((load(&path)?, Some(path))),
        None => {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
