// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded test run, as handed over by a framework integration.
//!
//! ```json
//! {"tests": [
//!   {"id": "CartTest#addsItem", "tier": "SmallTest", "elapsed": 0.042,
//!    "events": [{"capability": "network", "detail": "connect 10.0.0.1:80"}]}
//! ]}
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::enforce::CapabilityEvent;
use crate::error::Error;
use crate::tier::TestSizeTier;
use crate::violation::TestId;

/// Outcome of one executed test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub id: TestId,
    /// Tier marker name as declared on the test (`small`, `MediumTest`, ...).
    pub tier: String,
    /// Measured wall-clock time in seconds.
    #[serde(with = "crate::serde_secs")]
    pub elapsed: Duration,
    /// Capability accesses reported by the monitor while the test ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<CapabilityEvent>,
}

impl TestOutcome {
    pub fn new(id: impl Into<String>, tier: impl Into<String>, elapsed: Duration) -> Self {
        Self { id: TestId::new(id), tier: tier.into(), elapsed, events: Vec::new() }
    }

    pub fn with_event(mut self, event: CapabilityEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// All test outcomes of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResults {
    pub tests: Vec<TestOutcome>,
}

impl RunResults {
    pub fn new(tests: Vec<TestOutcome>) -> Self {
        Self { tests }
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        serde_json::from_str(content).map_err(|e| Error::InvalidResults(e.to_string()))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content)?)
    }

    /// Resolve every test's tier marker, failing on the first unknown one.
    pub fn resolve_tiers(&self) -> Result<Vec<TestSizeTier>, Error> {
        self.tests.iter().map(|t| t.tier.parse()).collect()
    }

    /// For each test, whether it is the first entry with its id in file order.
    pub fn first_occurrences(&self) -> Vec<bool> {
        let mut seen = HashSet::with_capacity(self.tests.len());
        self.tests.iter().map(|t| seen.insert(&t.id)).collect()
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
