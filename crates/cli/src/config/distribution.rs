// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `[distribution]` bounds.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::enforce::{DistributionConstraints, ProportionRange};
use crate::error::Error;
use crate::tier::TestSizeTier;

/// Bounds for one tier as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    #[serde(default)]
    pub min: Option<Bound>,
    #[serde(default)]
    pub max: Option<Bound>,
}

/// A proportion: `0.7`, `1`, or `"70%"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Integer(i64),
    Float(f64),
    Percent(String),
}

impl Bound {
    fn to_proportion(&self, tier: &str) -> Result<f64, Error> {
        match self {
            Self::Integer(n) => Ok(*n as f64),
            Self::Float(f) => Ok(*f),
            Self::Percent(s) => s
                .trim()
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f64>().ok())
                .map(|pct| pct / 100.0)
                .ok_or_else(|| Error::InvalidConstraint {
                    tier: tier.to_string(),
                    reason: format!("{s:?} is not a proportion or percentage"),
                }),
        }
    }
}

pub(super) fn resolve_constraints(
    entries: &BTreeMap<String, RangeConfig>,
) -> Result<DistributionConstraints, Error> {
    let mut constraints = DistributionConstraints::new();

    for (name, range) in entries {
        let tier: TestSizeTier = name.parse().map_err(|_| Error::InvalidConstraint {
            tier: name.clone(),
            reason: "not a known tier".to_string(),
        })?;

        if range.min.is_none() && range.max.is_none() {
            return Err(Error::InvalidConstraint {
                tier: name.clone(),
                reason: "expected at least one of min or max".to_string(),
            });
        }
        if constraints.get(tier).is_some() {
            return Err(Error::InvalidConstraint {
                tier: name.clone(),
                reason: format!("{tier} is constrained more than once"),
            });
        }

        let min = range.min.as_ref().map(|b| b.to_proportion(name)).transpose()?.unwrap_or(0.0);
        let max = range.max.as_ref().map(|b| b.to_proportion(name)).transpose()?.unwrap_or(1.0);
        constraints.insert(tier, ProportionRange::new(tier, min, max)?);
    }

    Ok(constraints)
}
