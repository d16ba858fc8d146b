// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finalized run report.
//!
//! The report is plain data, ready for serialization. Rendering it for
//! humans is left to whoever consumes it.

use serde::{Deserialize, Serialize};

use crate::mode::EnforcementMode;
use crate::violation::{PolicyDomain, Violation};

/// Overall outcome of a run. Ordered so that `max` picks the worst.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    #[default]
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    /// Verdict contribution of a surfaced violation under `mode`.
    pub fn for_mode(mode: EnforcementMode) -> Self {
        match mode {
            EnforcementMode::Off => Self::Pass,
            EnforcementMode::Warn => Self::Warn,
            EnforcementMode::Strict => Self::Fail,
        }
    }

    pub fn is_failure(self) -> bool {
        self == Self::Fail
    }
}

/// Violations surfaced for one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain: PolicyDomain,
    pub mode: EnforcementMode,
    pub violations: Vec<Violation>,
}

/// Result of a suite run after enforcement modes were applied.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteRunReport {
    pub verdict: Verdict,
    /// Domains with surfaced violations, in timing, hermeticity, distribution order.
    pub domains: Vec<DomainReport>,
}

impl SuiteRunReport {
    pub fn domain(&self, domain: PolicyDomain) -> Option<&DomainReport> {
        self.domains.iter().find(|d| d.domain == domain)
    }

    /// All surfaced violations, grouped by domain.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.domains.iter().flat_map(|d| d.violations.iter())
    }

    pub fn violation_count(&self) -> usize {
        self.domains.iter().map(|d| d.violations.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.domains.is_empty()
    }
}
