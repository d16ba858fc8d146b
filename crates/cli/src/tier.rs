// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test size tiers and their constraints.
//!
//! The catalog is a closed set of four tiers, each with a wall-clock budget
//! and a set of capability classes it may touch:
//!
//! | Tier   | Max duration | Capabilities                                  |
//! |--------|--------------|-----------------------------------------------|
//! | Small  | 1s           | none (hermetic)                               |
//! | Medium | 5min         | network, filesystem, sleep                    |
//! | Large  | 15min        | network, filesystem, database, subprocess, sleep |
//! | XLarge | unbounded    | all                                           |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Size tier a test declares through its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestSizeTier {
    Small,
    Medium,
    Large,
    #[serde(rename = "xlarge")]
    XLarge,
}

impl TestSizeTier {
    /// Every tier, smallest first.
    pub const ALL: [TestSizeTier; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];

    /// Constraints for this tier.
    pub fn spec(self) -> &'static TierSpec {
        &CATALOG[self.index()]
    }

    /// Maximum wall-clock duration, or `None` when unbounded.
    pub fn max_duration(self) -> Option<Duration> {
        self.spec().max_duration
    }

    /// Whether a test of this tier may use the given capability.
    pub fn allows(self, capability: CapabilityClass) -> bool {
        self.spec().allowed.contains(&capability)
    }

    /// Position in [`TestSizeTier::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::XLarge => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

impl fmt::Display for TestSizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestSizeTier {
    type Err = Error;

    /// Accepts tier names and marker names in any case: `small`, `SmallTest`,
    /// `x-large`, `XLargeTest`, `x_large`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let name = normalized.strip_suffix("test").unwrap_or(&normalized);

        match name {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::XLarge),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

/// Class of external resource a test can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityClass {
    Network,
    Filesystem,
    Database,
    Subprocess,
    Sleep,
}

impl CapabilityClass {
    pub const ALL: [CapabilityClass; 5] = [
        Self::Network,
        Self::Filesystem,
        Self::Database,
        Self::Subprocess,
        Self::Sleep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Filesystem => "filesystem",
            Self::Database => "database",
            Self::Subprocess => "subprocess",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for CapabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints attached to a tier.
#[derive(Debug, Serialize)]
pub struct TierSpec {
    pub tier: TestSizeTier,
    /// Inclusive wall-clock limit (`None` = unbounded).
    #[serde(with = "crate::serde_secs::option")]
    pub max_duration: Option<Duration>,
    pub allowed: &'static [CapabilityClass],
}

static CATALOG: [TierSpec; 4] = [
    TierSpec {
        tier: TestSizeTier::Small,
        max_duration: Some(Duration::from_secs(1)),
        allowed: &[],
    },
    TierSpec {
        tier: TestSizeTier::Medium,
        max_duration: Some(Duration::from_secs(5 * 60)),
        allowed: &[CapabilityClass::Network, CapabilityClass::Filesystem, CapabilityClass::Sleep],
    },
    TierSpec {
        tier: TestSizeTier::Large,
        max_duration: Some(Duration::from_secs(15 * 60)),
        allowed: &CapabilityClass::ALL,
    },
    TierSpec {
        tier: TestSizeTier::XLarge,
        max_duration: None,
        allowed: &CapabilityClass::ALL,
    },
];

/// Catalog lookups by marker name.
pub mod catalog {
    use super::{CATALOG, TestSizeTier, TierSpec};
    use crate::error::Error;

    /// Resolve a marker name to its tier constraints.
    pub fn resolve(name: &str) -> Result<&'static TierSpec, Error> {
        Ok(name.parse::<TestSizeTier>()?.spec())
    }

    /// The full catalog, smallest tier first.
    pub fn all() -> &'static [TierSpec] {
        &CATALOG
    }
}

#[cfg(test)]
#[path = "tier_tests.rs"]
mod tests;
