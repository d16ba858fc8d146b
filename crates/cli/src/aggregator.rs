// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe violation collection and final verdict.
//!
//! `record` may be called from any number of worker threads. `finalize`
//! runs once, after every worker has joined, and applies the resolved
//! enforcement modes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Error;
use crate::mode::{DomainModes, EnforcementMode};
use crate::report::{DomainReport, SuiteRunReport, Verdict};
use crate::violation::{PolicyDomain, Violation};

enum State {
    Recording(Vec<Violation>),
    Finalized,
}

/// Collects violations for one run.
pub struct OutcomeAggregator {
    state: Mutex<State>,
}

impl Default for OutcomeAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeAggregator {
    pub fn new() -> Self {
        Self { state: Mutex::new(State::Recording(Vec::new())) }
    }

    /// Append a violation to the in-progress run.
    pub fn record(&self, violation: Violation) -> Result<(), Error> {
        match &mut *self.lock() {
            State::Recording(violations) => {
                tracing::debug!(kind = ?violation.kind, tier = %violation.tier, "{}", violation.detail);
                violations.push(violation);
                Ok(())
            }
            State::Finalized => Err(Error::LifecycleViolation("record called after finalize")),
        }
    }

    /// Number of violations recorded so far (before mode filtering), or
    /// `None` once the aggregator has been finalized.
    pub fn recorded(&self) -> Option<usize> {
        match &*self.lock() {
            State::Recording(violations) => Some(violations.len()),
            State::Finalized => None,
        }
    }

    /// Apply enforcement modes and produce the report. Callable once.
    pub fn finalize(&self, modes: &DomainModes) -> Result<SuiteRunReport, Error> {
        let recorded = match std::mem::replace(&mut *self.lock(), State::Finalized) {
            State::Recording(violations) => violations,
            State::Finalized => return Err(Error::LifecycleViolation("finalize called twice")),
        };

        let total = recorded.len();
        let mut grouped: [Vec<Violation>; 3] = Default::default();
        for violation in recorded {
            grouped[domain_slot(violation.domain())].push(violation);
        }

        let mut report = SuiteRunReport::default();
        let mut dropped = 0;
        for (domain, mut violations) in PolicyDomain::ALL.into_iter().zip(grouped) {
            let mode = modes.get(domain);
            if violations.is_empty() {
                continue;
            }
            if mode == EnforcementMode::Off {
                dropped += violations.len();
                continue;
            }

            // Recording order depends on worker scheduling; sort for stable output.
            violations.sort_by(|a, b| {
                a.test.cmp(&b.test).then(a.tier.cmp(&b.tier)).then_with(|| a.detail.cmp(&b.detail))
            });

            report.verdict = report.verdict.max(Verdict::for_mode(mode));
            report.domains.push(DomainReport { domain, mode, violations });
        }

        tracing::info!(
            verdict = ?report.verdict,
            recorded = total,
            surfaced = report.violation_count(),
            dropped,
            "enforcement finalized"
        );
        Ok(report)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Poisoning only means a recorder panicked mid-log; the Vec itself is intact.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn domain_slot(domain: PolicyDomain) -> usize {
    match domain {
        PolicyDomain::Timing => 0,
        PolicyDomain::Hermeticity => 1,
        PolicyDomain::Distribution => 2,
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
