// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test time budget enforcement.

use std::time::Duration;

use crate::tier::TestSizeTier;
use crate::violation::{TestId, Violation};

/// Check a completed test's elapsed time against its tier's budget.
///
/// The limit is inclusive: a Small test that takes exactly 1s passes.
/// XLarge tests are unbounded and never violate.
pub fn check_timing(test: &TestId, tier: TestSizeTier, elapsed: Duration) -> Option<Violation> {
    let limit = tier.max_duration()?;
    if elapsed > limit {
        Some(Violation::timing_exceeded(test.clone(), tier, elapsed, limit))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
