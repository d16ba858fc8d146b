// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Enforcement mode resolution.
//!
//! Every domain defaults to `Off`: enforcement is opt-in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::violation::PolicyDomain;

/// Severity applied to a policy domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementMode {
    /// Violations are dropped.
    #[default]
    Off,
    /// Violations are reported but do not fail the run.
    Warn,
    /// Violations are reported and fail the run.
    Strict,
}

impl EnforcementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnforcementMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "strict" => Ok(Self::Strict),
            _ => Err(()),
        }
    }
}

/// Raw mode strings as supplied by configuration, one per domain.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeSettings {
    pub timing: Option<String>,
    pub hermeticity: Option<String>,
    pub distribution: Option<String>,
}

impl ModeSettings {
    pub fn get(&self, domain: PolicyDomain) -> Option<&str> {
        match domain {
            PolicyDomain::Timing => self.timing.as_deref(),
            PolicyDomain::Hermeticity => self.hermeticity.as_deref(),
            PolicyDomain::Distribution => self.distribution.as_deref(),
        }
    }

    /// Replace the entry for `domain` when `value` is set.
    pub fn override_with(&mut self, domain: PolicyDomain, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        let slot = match domain {
            PolicyDomain::Timing => &mut self.timing,
            PolicyDomain::Hermeticity => &mut self.hermeticity,
            PolicyDomain::Distribution => &mut self.distribution,
        };
        *slot = Some(value.to_string());
    }
}

/// Resolve the mode for one domain.
///
/// Unset entries resolve to `Off`. Values are case-insensitive.
pub fn resolve(domain: PolicyDomain, settings: &ModeSettings) -> Result<EnforcementMode, Error> {
    match settings.get(domain) {
        None => Ok(EnforcementMode::Off),
        Some(value) => value
            .parse()
            .map_err(|()| Error::InvalidMode { domain, value: value.to_string() }),
    }
}

/// Resolved modes for all domains.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainModes {
    pub timing: EnforcementMode,
    pub hermeticity: EnforcementMode,
    pub distribution: EnforcementMode,
}

impl DomainModes {
    /// Resolve every domain, failing on the first malformed entry.
    pub fn resolve(settings: &ModeSettings) -> Result<Self, Error> {
        Ok(Self {
            timing: resolve(PolicyDomain::Timing, settings)?,
            hermeticity: resolve(PolicyDomain::Hermeticity, settings)?,
            distribution: resolve(PolicyDomain::Distribution, settings)?,
        })
    }

    /// Same mode for every domain.
    pub fn uniform(mode: EnforcementMode) -> Self {
        Self { timing: mode, hermeticity: mode, distribution: mode }
    }

    pub fn get(&self, domain: PolicyDomain) -> EnforcementMode {
        match domain {
            PolicyDomain::Timing => self.timing,
            PolicyDomain::Hermeticity => self.hermeticity,
            PolicyDomain::Distribution => self.distribution,
        }
    }

    pub fn with(mut self, domain: PolicyDomain, mode: EnforcementMode) -> Self {
        match domain {
            PolicyDomain::Timing => self.timing = mode,
            PolicyDomain::Hermeticity => self.hermeticity = mode,
            PolicyDomain::Distribution => self.distribution = mode,
        }
        self
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
