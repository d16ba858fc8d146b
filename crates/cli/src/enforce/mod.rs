// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Policy checks.
//!
//! Timing and capability checks are pure per-test functions and may run on
//! any worker thread. The distribution check runs once per suite, after every
//! worker has joined.

pub mod capability;
pub mod distribution;
pub mod timing;

pub use capability::{CapabilityEvent, check_capability};
pub use distribution::{DistributionConstraints, ProportionRange, TierCounts, check_distribution};
pub use timing::check_timing;
