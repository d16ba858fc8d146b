// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved enforcement policy for one run.

use serde::Serialize;

use crate::enforce::DistributionConstraints;
use crate::mode::DomainModes;

/// Modes and distribution constraints in force for a run.
///
/// Built once from configuration before any test is processed and passed
/// explicitly to the session; never mutated mid-run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Policy {
    pub modes: DomainModes,
    pub constraints: DistributionConstraints,
}

impl Policy {
    pub fn new(modes: DomainModes, constraints: DistributionConstraints) -> Self {
        Self { modes, constraints }
    }
}
