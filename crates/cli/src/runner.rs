// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel replay of a recorded run through an enforcement session.
//!
//! Tests are fed to the session from rayon workers, the same way a
//! framework integration reports completions from its own worker pool.
//! The distribution check runs only after the parallel phase has joined.

use rayon::prelude::*;

use crate::error::Error;
use crate::policy::Policy;
use crate::report::SuiteRunReport;
use crate::results::RunResults;
use crate::session::Session;

/// Enforce `policy` over a recorded run.
///
/// Every tier marker is resolved before any test is checked, so an unknown
/// tier fails the run without partial enforcement. When an id appears more
/// than once, only its first entry in file order completes; capability
/// events of every entry are still checked.
pub fn run(results: &RunResults, policy: &Policy) -> Result<SuiteRunReport, Error> {
    let tiers = results.resolve_tiers()?;
    let first = results.first_occurrences();
    tracing::debug!(tests = results.tests.len(), "enforcing recorded run");

    let session = Session::new(policy);

    results
        .tests
        .par_iter()
        .zip(tiers.par_iter())
        .zip(first.par_iter())
        .try_for_each(|((outcome, &tier), &is_first)| {
            for event in &outcome.events {
                session.capability_observed(&outcome.id, tier, event)?;
            }
            if is_first {
                session.test_completed(&outcome.id, tier, outcome.elapsed)?;
            } else {
                tracing::debug!(test = %outcome.id, "repeated entry, completion skipped");
            }
            Ok::<_, Error>(())
        })?;

    session.finish()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
