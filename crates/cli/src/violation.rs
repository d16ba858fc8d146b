// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violation records.
//!
//! A violation is created by one of the enforcers, never mutated afterwards,
//! and owned by the aggregator until the report is finalized.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tier::{CapabilityClass, TestSizeTier};

/// Identity of a single test case, e.g. `com.example.CartTest#addsItem`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Policy domain a violation belongs to. Each domain has its own mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDomain {
    Timing,
    Hermeticity,
    Distribution,
}

impl PolicyDomain {
    /// Every domain, in report order.
    pub const ALL: [PolicyDomain; 3] = [Self::Timing, Self::Hermeticity, Self::Distribution];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timing => "timing",
            Self::Hermeticity => "hermeticity",
            Self::Distribution => "distribution",
        }
    }
}

impl fmt::Display for PolicyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    TimingExceeded,
    UnauthorizedCapability,
    DistributionImbalance,
}

impl ViolationKind {
    pub fn domain(self) -> PolicyDomain {
        match self {
            Self::TimingExceeded => PolicyDomain::Timing,
            Self::UnauthorizedCapability => PolicyDomain::Hermeticity,
            Self::DistributionImbalance => PolicyDomain::Distribution,
        }
    }
}

/// What was observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Measured {
    /// Elapsed wall-clock time, in seconds.
    Duration(#[serde(with = "crate::serde_secs")] Duration),
    /// Capability class the test reached for.
    Capability(CapabilityClass),
    /// Share of the suite a tier holds.
    Proportion { count: usize, total: usize, actual: f64 },
}

/// The bound that was breached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Limit {
    Duration(#[serde(with = "crate::serde_secs")] Duration),
    Allowed(Vec<CapabilityClass>),
    MinProportion(f64),
    MaxProportion(f64),
}

/// A single breach of a timing, capability, or distribution policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Offending test; `None` for suite-level violations.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub test: Option<TestId>,
    pub tier: TestSizeTier,
    pub measured: Measured,
    pub limit: Limit,
    pub detail: String,
}

impl Violation {
    pub fn timing_exceeded(test: TestId, tier: TestSizeTier, elapsed: Duration, limit: Duration) -> Self {
        let detail = format!(
            "{} took {:.3}s, exceeding the {} limit of {:.3}s",
            test,
            elapsed.as_secs_f64(),
            tier,
            limit.as_secs_f64()
        );
        Self {
            kind: ViolationKind::TimingExceeded,
            test: Some(test),
            tier,
            measured: Measured::Duration(elapsed),
            limit: Limit::Duration(limit),
            detail,
        }
    }

    pub fn unauthorized_capability(
        test: TestId,
        tier: TestSizeTier,
        capability: CapabilityClass,
        event_detail: &str,
    ) -> Self {
        let mut detail = format!("{} used {} access, not allowed for {} tests", test, capability, tier);
        if !event_detail.is_empty() {
            detail.push_str(": ");
            detail.push_str(event_detail);
        }
        Self {
            kind: ViolationKind::UnauthorizedCapability,
            test: Some(test),
            tier,
            measured: Measured::Capability(capability),
            limit: Limit::Allowed(tier.spec().allowed.to_vec()),
            detail,
        }
    }

    /// A tier holds less of the suite than its configured minimum.
    pub fn distribution_below_min(tier: TestSizeTier, count: usize, total: usize, min: f64) -> Self {
        let actual = proportion(count, total);
        let detail = format!(
            "{} tests are {:.2}% of the suite ({}/{}), below the minimum of {:.2}%",
            tier,
            actual * 100.0,
            count,
            total,
            min * 100.0
        );
        Self::distribution(tier, count, total, Limit::MinProportion(min), detail)
    }

    /// A tier holds more of the suite than its configured maximum.
    pub fn distribution_above_max(tier: TestSizeTier, count: usize, total: usize, max: f64) -> Self {
        let actual = proportion(count, total);
        let detail = format!(
            "{} tests are {:.2}% of the suite ({}/{}), above the maximum of {:.2}%",
            tier,
            actual * 100.0,
            count,
            total,
            max * 100.0
        );
        Self::distribution(tier, count, total, Limit::MaxProportion(max), detail)
    }

    fn distribution(tier: TestSizeTier, count: usize, total: usize, limit: Limit, detail: String) -> Self {
        Self {
            kind: ViolationKind::DistributionImbalance,
            test: None,
            tier,
            measured: Measured::Proportion { count, total, actual: proportion(count, total) },
            limit,
            detail,
        }
    }

    pub fn domain(&self) -> PolicyDomain {
        self.kind.domain()
    }
}

/// Share of `total` held by `count`, at full f64 precision.
///
/// Division of the two integers is correctly rounded, so a ratio that equals a
/// configured decimal bound (60/100 vs `0.60`) compares equal to it.
pub fn proportion(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 / total as f64 }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
