// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test size tier enforcement.
//!
//! Tests declare a size tier (Small, Medium, Large, XLarge). During a run the
//! engine checks each test's elapsed time and observed capability accesses
//! against its tier, then checks the suite's tier mix against configured
//! proportions. Each policy domain is enforced as off, warn, or strict, and
//! the run ends in a single verdict.

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod enforce;
pub mod error;
pub mod latest;
pub mod logging;
pub mod mode;
pub mod output;
pub mod policy;
pub mod report;
pub mod results;
pub mod runner;
pub mod session;
pub mod tier;
pub mod violation;

mod serde_secs;


pub use aggregator::OutcomeAggregator;
pub use enforce::{
    CapabilityEvent, DistributionConstraints, ProportionRange, TierCounts, check_capability,
    check_distribution, check_timing,
};
pub use error::{Error, ExitCode};
pub use mode::{DomainModes, EnforcementMode, ModeSettings, resolve};
pub use policy::Policy;
pub use report::{DomainReport, SuiteRunReport, Verdict};
pub use session::Session;
pub use tier::{CapabilityClass, TestSizeTier, TierSpec};
pub use violation::{Limit, Measured, PolicyDomain, TestId, Violation, ViolationKind};
