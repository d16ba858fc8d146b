// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Enforcement session: the lifecycle a test-framework integration drives.
//!
//! 1. Resolve each test's tier before it runs.
//! 2. Call [`Session::capability_observed`] for each monitor event.
//! 3. Call [`Session::test_completed`] with the measured elapsed time.
//! 4. After every worker has joined, call [`Session::finish`] once.
//!
//! Steps 2 and 3 may be called concurrently from any number of threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dashmap::DashSet;

use crate::aggregator::OutcomeAggregator;
use crate::enforce::{CapabilityEvent, TierCounts, check_capability, check_distribution, check_timing};
use crate::error::Error;
use crate::policy::Policy;
use crate::report::SuiteRunReport;
use crate::tier::TestSizeTier;
use crate::violation::TestId;

/// State for one suite run.
pub struct Session<'a> {
    policy: &'a Policy,
    aggregator: OutcomeAggregator,
    completed: DashSet<TestId>,
    counts: [AtomicUsize; 4],
}

impl<'a> Session<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self {
            policy,
            aggregator: OutcomeAggregator::new(),
            completed: DashSet::new(),
            counts: Default::default(),
        }
    }

    /// Record a finished test and check its elapsed time.
    ///
    /// Only the first completion of a test id counts; repeats (e.g. a retried
    /// callback) are ignored, so a test never carries two timing violations.
    /// Returns whether this completion was counted.
    pub fn test_completed(
        &self,
        test: &TestId,
        tier: TestSizeTier,
        elapsed: Duration,
    ) -> Result<bool, Error> {
        if !self.completed.insert(test.clone()) {
            tracing::debug!(%test, "duplicate completion ignored");
            return Ok(false);
        }
        self.counts[tier.index()].fetch_add(1, Ordering::Relaxed);

        if let Some(violation) = check_timing(test, tier, elapsed) {
            self.aggregator.record(violation)?;
        }
        Ok(true)
    }

    /// Check one capability access reported by the monitor.
    pub fn capability_observed(
        &self,
        test: &TestId,
        tier: TestSizeTier,
        event: &CapabilityEvent,
    ) -> Result<(), Error> {
        if let Some(violation) = check_capability(test, tier, event) {
            self.aggregator.record(violation)?;
        }
        Ok(())
    }

    /// Snapshot of the tier histogram so far.
    pub fn counts(&self) -> TierCounts {
        let mut counts = TierCounts::new();
        for tier in TestSizeTier::ALL {
            counts.add(tier, self.counts[tier.index()].load(Ordering::Relaxed));
        }
        counts
    }

    /// Violations recorded so far, before modes are applied.
    pub fn recorded(&self) -> usize {
        // `finish` consumes the session, so the aggregator is still recording.
        self.aggregator.recorded().unwrap_or(0)
    }

    /// Validate the tier distribution and produce the final report.
    ///
    /// Takes the session by value: once every worker has released its
    /// borrow, the histogram is stable.
    pub fn finish(self) -> Result<SuiteRunReport, Error> {
        let counts = self.counts();
        tracing::debug!(total = counts.total(), ?counts, "validating tier distribution");

        for violation in check_distribution(&counts, &self.policy.constraints) {
            self.aggregator.record(violation)?;
        }
        self.aggregator.finalize(&self.policy.modes)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
