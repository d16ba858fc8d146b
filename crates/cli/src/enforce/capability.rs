// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capability access enforcement.
//!
//! Events come from an external monitor that intercepts network, filesystem,
//! database, subprocess, and sleep calls. This module only judges them.

use serde::{Deserialize, Serialize};

use crate::tier::{CapabilityClass, TestSizeTier};
use crate::violation::{TestId, Violation};

/// One observed resource access during a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityEvent {
    pub capability: CapabilityClass,
    /// Free-form description from the monitor (call site, target address).
    #[serde(default)]
    pub detail: String,
}

impl CapabilityEvent {
    pub fn new(capability: CapabilityClass, detail: impl Into<String>) -> Self {
        Self { capability, detail: detail.into() }
    }
}

/// Check one observed access against the test's tier.
///
/// Every unauthorized access is reported on its own; repeated events for the
/// same test are not collapsed, so each offending call site shows up.
pub fn check_capability(
    test: &TestId,
    tier: TestSizeTier,
    event: &CapabilityEvent,
) -> Option<Violation> {
    if tier.allows(event.capability) {
        return None;
    }
    Some(Violation::unauthorized_capability(test.clone(), tier, event.capability, &event.detail))
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
