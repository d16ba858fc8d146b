// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite-level tier distribution validation.
//!
//! Proportions are computed at full precision and compared exactly. A
//! tier with no configured range is unconstrained, not "must be zero".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tier::TestSizeTier;
use crate::violation::{Violation, proportion};

/// Number of tests observed per tier in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    counts: [usize; 4],
}

impl TierCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiers(tiers: impl IntoIterator<Item = TestSizeTier>) -> Self {
        let mut counts = Self::new();
        for tier in tiers {
            counts.add(tier, 1);
        }
        counts
    }

    pub fn add(&mut self, tier: TestSizeTier, n: usize) {
        self.counts[tier.index()] += n;
    }

    pub fn get(&self, tier: TestSizeTier) -> usize {
        self.counts[tier.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(tier, count)` pairs, smallest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (TestSizeTier, usize)> + '_ {
        TestSizeTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }
}

/// Allowed share of the suite for one tier, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProportionRange {
    min: f64,
    max: f64,
}

impl ProportionRange {
    /// Build a range, rejecting bounds outside `[0, 1]` or `min > max`.
    pub fn new(tier: TestSizeTier, min: f64, max: f64) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidConstraint { tier: tier.to_string(), reason };

        for (name, value) in [("min", min), ("max", max)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} = {value} is outside 0.0..=1.0")));
            }
        }
        if min > max {
            return Err(invalid(format!("min = {min} is greater than max = {max}")));
        }
        Ok(Self { min, max })
    }

    pub fn at_least(tier: TestSizeTier, min: f64) -> Result<Self, Error> {
        Self::new(tier, min, 1.0)
    }

    pub fn at_most(tier: TestSizeTier, max: f64) -> Result<Self, Error> {
        Self::new(tier, 0.0, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Per-tier proportion ranges in force for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistributionConstraints {
    ranges: BTreeMap<TestSizeTier, ProportionRange>,
}

impl DistributionConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tier: TestSizeTier, range: ProportionRange) -> Self {
        self.insert(tier, range);
        self
    }

    pub fn insert(&mut self, tier: TestSizeTier, range: ProportionRange) {
        self.ranges.insert(tier, range);
    }

    pub fn get(&self, tier: TestSizeTier) -> Option<&ProportionRange> {
        self.ranges.get(&tier)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TestSizeTier, &ProportionRange)> {
        self.ranges.iter().map(|(tier, range)| (*tier, range))
    }
}

/// Validate the tier mix of a finished run.
///
/// Returns one violation per constrained tier whose share falls outside its
/// range, in tier order. An empty run has nothing to validate. The min bound
/// is checked first, so a tier that somehow breaches both reports the min.
pub fn check_distribution(
    counts: &TierCounts,
    constraints: &DistributionConstraints,
) -> Vec<Violation> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    let mut violations = Vec::new();
    for (tier, range) in constraints.iter() {
        let count = counts.get(tier);
        let actual = proportion(count, total);

        if actual < range.min {
            violations.push(Violation::distribution_below_min(tier, count, total, range.min));
        } else if actual > range.max {
            violations.push(Violation::distribution_above_max(tier, count, total, range.max));
        }
    }
    violations
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
